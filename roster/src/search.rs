use entity::Employee;

/// Substring match over the searchable fields: case-insensitive for `name`,
/// `last_name` and `position`; `dni` is compared as raw text.
pub fn matches(record: &Employee, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.last_name.to_lowercase().contains(&needle)
        || record.position.to_lowercase().contains(&needle)
        || record.dni.contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::EmployeeDraft;

    fn ana() -> Employee {
        Employee::from_draft(EmployeeDraft {
            name: "Ana".into(),
            last_name: "Diaz".into(),
            position: "Clerk".into(),
            dni: "X-123".into(),
            age: Some(34),
            description: "night shift".into(),
        })
    }

    #[test]
    fn name_matches_are_case_insensitive() {
        assert!(matches(&ana(), "ana"));
        assert!(matches(&ana(), "DIAZ"));
        assert!(matches(&ana(), "clerk"));
    }

    #[test]
    fn dni_matches_are_case_sensitive() {
        assert!(matches(&ana(), "X-12"));
        assert!(!matches(&ana(), "x-12"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches(&ana(), ""));
    }

    #[test]
    fn description_is_not_searched() {
        assert!(!matches(&ana(), "night"));
    }

    #[test]
    fn unrelated_query_does_not_match() {
        assert!(!matches(&ana(), "999"));
    }
}
