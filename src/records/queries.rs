/// Base query for `SELECT`ing records from the database.
pub static SELECT: &str = r#"
	SELECT
	  r.id,
	  r.name,
	  r.created_on
	FROM
	  Records r
"#;
