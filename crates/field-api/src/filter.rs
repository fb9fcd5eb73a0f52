//! Case-insensitive substring filtering of icon options.
//!
//! The filter is a linear scan with no ranking: results keep the order the
//! options were declared in.

use crate::option::IconOption;

/// Return the options matching `term`.
///
/// An empty term returns every option unchanged. Otherwise an option is kept
/// when its value, name, or any search term contains `term`, ignoring case.
#[must_use]
pub fn filter_options(options: &[IconOption], term: &str) -> Vec<IconOption> {
	if term.is_empty() {
		return options.to_vec();
	}

	let needle = term.to_lowercase();
	let matches: Vec<IconOption> = options
		.iter()
		.filter(|option| contains_lowercase(option, &needle))
		.cloned()
		.collect();
	tracing::trace!(
		target: "iconpick_api::filter",
		term,
		total = options.len(),
		matched = matches.len(),
		"filtered icon options"
	);
	matches
}

/// Whether `option` is kept by [`filter_options`] for `term`.
#[must_use]
pub fn matches_term(option: &IconOption, term: &str) -> bool {
	term.is_empty() || contains_lowercase(option, &term.to_lowercase())
}

fn contains_lowercase(option: &IconOption, needle: &str) -> bool {
	option
		.search_haystack()
		.any(|candidate| candidate.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn options() -> Vec<IconOption> {
		vec![
			IconOption::new("star", "Star", "icon-star").with_search_terms(["favorite"]),
			IconOption::new("heart", "Heart", "icon-heart").with_search_terms(["love"]),
			IconOption::new("admin-users", "Users", "dashicons-admin-users")
				.with_search_terms(["people", "Members"]),
		]
	}

	fn values(options: &[IconOption]) -> Vec<&str> {
		options.iter().map(|option| option.value.as_str()).collect()
	}

	#[test]
	fn empty_term_returns_all_in_order() {
		let options = options();
		assert_eq!(filter_options(&options, ""), options);
	}

	#[test]
	fn matches_search_terms() {
		assert_eq!(values(&filter_options(&options(), "fav")), vec!["star"]);
		assert_eq!(values(&filter_options(&options(), "lov")), vec!["heart"]);
	}

	#[test]
	fn matches_anywhere_in_value_or_name() {
		assert_eq!(values(&filter_options(&options(), "min-us")), vec!["admin-users"]);
		assert_eq!(values(&filter_options(&options(), "ear")), vec!["heart"]);
	}

	#[test]
	fn ignores_case_of_term_and_haystack() {
		let options = options();
		let lower = filter_options(&options, "members");
		assert_eq!(values(&lower), vec!["admin-users"]);
		assert_eq!(filter_options(&options, "MEMBERS"), lower);
		assert_eq!(filter_options(&options, "MeMbErS"), lower);
	}

	#[test]
	fn result_is_a_stable_subsequence() {
		let options = options();
		let matched = filter_options(&options, "a");
		assert_eq!(values(&matched), vec!["star", "heart", "admin-users"]);

		let matched = filter_options(&options, "s");
		assert_eq!(values(&matched), vec!["star", "admin-users"]);
	}

	#[test]
	fn every_result_contains_the_term() {
		let options = options();
		for term in ["s", "ST", "love", "ople", "x"] {
			let needle = term.to_lowercase();
			for option in filter_options(&options, term) {
				assert!(
					option
						.search_haystack()
						.any(|candidate| candidate.to_lowercase().contains(&needle)),
					"{} kept for {term:?}",
					option.value
				);
			}
		}
	}

	#[test]
	fn no_match_yields_empty_list() {
		assert!(filter_options(&options(), "zzz").is_empty());
	}

	#[test]
	fn matches_term_agrees_with_filter() {
		let options = options();
		for option in &options {
			assert!(matches_term(option, ""));
		}
		assert!(matches_term(&options[0], "FAVOR"));
		assert!(!matches_term(&options[1], "favor"));
	}
}
