use anyhow::Result;
use iconpick::{FieldOutcome, IconOption};
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &FieldOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled (value: '{}')", outcome.field.value);
		return;
	}

	if outcome.field.value.is_empty() {
		println!("No icon selected");
	} else {
		println!("{}", outcome.field.value);
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &FieldOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"name": outcome.field.name,
		"id": outcome.field.id,
		"value": outcome.field.value,
		"changes": outcome.changes,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &FieldOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Print a list of options, one per line or as a JSON array.
pub(crate) fn print_options(options: &[IconOption], json: bool) -> Result<()> {
	if json {
		println!("{}", serde_json::to_string_pretty(options)?);
		return Ok(());
	}
	for option in options {
		println!("{}\t{}\t{}", option.value, option.name, option.class);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use iconpick::{FieldChange, HiddenField};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_value_and_changes() {
		let outcome = FieldOutcome {
			accepted: true,
			field: HiddenField::new("icon", "field-id", "star"),
			changes: vec![FieldChange::new("field-id", "heart"), FieldChange::new("field-id", "star")],
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["value"], "star");
		assert_eq!(value["name"], "icon");
		assert_eq!(value["changes"].as_array().map(Vec::len), Some(2));
		assert_eq!(value["changes"][0]["value"], "heart");
	}
}
