//! Near-match suggestions for misspelled setting names

/// Maximum number of suggestions returned for one name
pub const MAX_HINTS: usize = 3;

/// Levenshtein distance over chars
fn edit_distance(a: &[char], b: &[char]) -> usize {
	let mut prev: Vec<usize> = (0..=b.len()).collect();
	let mut cur = vec![0; b.len() + 1];

	for (i, ca) in a.iter().enumerate() {
		cur[0] = i + 1;
		for (j, cb) in b.iter().enumerate() {
			let substitution = prev[j] + usize::from(ca != cb);
			cur[j + 1] = substitution.min(prev[j + 1] + 1).min(cur[j] + 1);
		}
		std::mem::swap(&mut prev, &mut cur);
	}

	prev[b.len()]
}

/// Candidates within half the length of `name` in edit distance (case-insensitive),
/// closest first, at most `limit` of them
pub fn near_matches<'a, I>(name: &str, candidates: I, limit: usize) -> Vec<String>
where
	I: IntoIterator<Item = &'a str>,
{
	let target: Vec<char> = name.to_lowercase().chars().collect();
	let max_distance = target.len() / 2;

	let mut matches: Vec<(usize, &str)> = candidates
		.into_iter()
		.filter_map(|candidate| {
			let chars: Vec<char> = candidate.to_lowercase().chars().collect();
			let distance = edit_distance(&target, &chars);
			(distance <= max_distance).then_some((distance, candidate))
		})
		.collect();

	matches.sort_unstable();
	matches.into_iter().take(limit).map(|(_, candidate)| candidate.to_owned()).collect()
}


// vim: ts=4
