use entity::Employee;

/// Render the roster table. Rows carry their position in the full sequence
/// so the printed numbers stay valid for `edit`/`delete` even when filtered.
pub fn table(rows: &[(usize, &Employee)]) -> String {
    if rows.is_empty() {
        return "no matching records".to_string();
    }
    let mut name_w = "NAME".len();
    let mut last_w = "LAST NAME".len();
    let mut pos_w = "POSITION".len();
    let mut dni_w = "DNI".len();
    for (_, record) in rows {
        name_w = name_w.max(record.name.len());
        last_w = last_w.max(record.last_name.len());
        pos_w = pos_w.max(record.position.len());
        dni_w = dni_w.max(record.dni.len());
    }
    let mut out = format!(
        "{:>3}  {:<name_w$}  {:<last_w$}  {:<pos_w$}  {:<dni_w$}  AGE\n",
        "#", "NAME", "LAST NAME", "POSITION", "DNI",
    );
    for (index, record) in rows {
        let age = record.age.map(|a| a.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{index:>3}  {:<name_w$}  {:<last_w$}  {:<pos_w$}  {:<dni_w$}  {age}\n",
            record.name, record.last_name, record.position, record.dni,
        ));
    }
    out.pop();
    out
}

/// Render every field of one record, the detail-view analog.
pub fn detail(record: &Employee) -> String {
    let age = record
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "name:        {}\n\
         last name:   {}\n\
         position:    {}\n\
         dni:         {}\n\
         age:         {}\n\
         description: {}",
        record.name, record.last_name, record.position, record.dni, age, record.description,
    )
}
