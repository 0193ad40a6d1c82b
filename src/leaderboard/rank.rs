//! The rank computation.
//!
//! A rank is a property of the whole ordered set, not of a single record: any implementation has
//! to establish the global order first and only then locate an individual entry's position.
//! Filtering before ranking would leave "rank" undefined, which is why [`rank_for()`] is built
//! on top of [`leaderboard()`] instead of narrowing the input up front.

use crate::leaderboard::{LeaderboardEntry, RankedEntry};
use crate::records::{PlayerId, Record};

/// Aggregates `records` into a leaderboard.
///
/// Records are grouped by ID and counted. Each entry's name is the first one encountered for its
/// ID in input order, so it is stable within one query but may be any of the names a player has
/// used. Entries are sorted by count descending; ties are broken by ID ascending so that equal
/// counts always come back in the same order.
pub fn leaderboard(records: &[Record]) -> Vec<LeaderboardEntry> {
	let mut entries = Vec::<LeaderboardEntry>::new();

	for record in records {
		match entries.iter().position(|entry| entry.id == record.id) {
			Some(idx) => {
				if let Some(entry) = entries.get_mut(idx) {
					entry.count += 1;
				}
			}
			None => entries.push(LeaderboardEntry {
				id: record.id,
				count: 1,
				name: record.name.clone(),
			}),
		}
	}

	entries.sort_by(|lhs, rhs| rhs.count.cmp(&lhs.count).then(lhs.id.cmp(&rhs.id)));
	entries
}

/// Computes the full leaderboard and locates `target`'s entry, augmented with its 1-based rank.
///
/// Returns [`None`] if no record with that ID exists anywhere in `records`.
pub fn rank_for(records: &[Record], target: PlayerId) -> Option<RankedEntry> {
	leaderboard(records)
		.into_iter()
		.zip(1u64..)
		.find(|(entry, _)| entry.id == target)
		.map(|(entry, rank)| RankedEntry {
			id: entry.id,
			count: entry.count,
			name: entry.name,
			rank,
		})
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::missing_assert_message)]
mod tests {
	use chrono::Utc;
	use rand::Rng;

	use super::{leaderboard, rank_for};
	use crate::records::Record;

	/// Shorthand for building a record in tests.
	fn record(id: i64, name: &str) -> Record {
		Record {
			id,
			name: name.to_owned(),
			created_on: Utc::now(),
		}
	}

	#[test]
	fn empty_collection_yields_empty_leaderboard() {
		assert!(leaderboard(&[]).is_empty());
		assert!(rank_for(&[], 1).is_none());
	}

	#[test]
	fn counts_sum_to_record_count() {
		let records = [
			record(1, "A"),
			record(2, "B"),
			record(1, "A"),
			record(3, "C"),
			record(1, "A"),
		];

		let total: u64 = leaderboard(&records)
			.iter()
			.map(|entry| entry.count)
			.sum();

		assert_eq!(total, records.len() as u64);
	}

	#[test]
	fn counts_sum_to_record_count_for_random_collections() {
		let mut rng = rand::thread_rng();
		let records = (0..500)
			.map(|_| {
				let id = rng.gen_range(0..20);
				record(id, &format!("player {id}"))
			})
			.collect::<Vec<_>>();

		let entries = leaderboard(&records);
		let total: u64 = entries.iter().map(|entry| entry.count).sum();

		assert_eq!(total, records.len() as u64);
	}

	#[test]
	fn entries_are_sorted_by_count_descending() {
		let mut rng = rand::thread_rng();
		let records = (0..200)
			.map(|_| {
				let id = rng.gen_range(0..10);
				record(id, &format!("player {id}"))
			})
			.collect::<Vec<_>>();

		let entries = leaderboard(&records);

		for window in entries.windows(2) {
			assert!(
				window[0].count >= window[1].count,
				"leaderboard must be non-increasing by count",
			);
		}
	}

	#[test]
	fn ties_are_broken_by_id_ascending() {
		let records = [record(9, "X"), record(3, "Y"), record(7, "Z")];

		let ids = leaderboard(&records)
			.iter()
			.map(|entry| entry.id)
			.collect::<Vec<_>>();

		assert_eq!(ids, [3, 7, 9]);
	}

	#[test]
	fn first_name_encountered_wins() {
		let records = [record(1, "old name"), record(1, "new name")];

		let entries = leaderboard(&records);

		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].name, "old name");
	}

	#[test]
	fn rank_reflects_position_in_the_global_order() {
		let records = [
			record(1, "A"),
			record(1, "A"),
			record(1, "A"),
			record(2, "B"),
			record(2, "B"),
			record(3, "C"),
		];

		// No ties here, so each rank is 1 + the number of strictly greater counts.
		let entries = leaderboard(&records);

		for entry in &entries {
			let greater = entries
				.iter()
				.filter(|other| other.count > entry.count)
				.count() as u64;

			let ranked = rank_for(&records, entry.id).expect("entry exists");

			assert_eq!(ranked.rank, greater + 1);
		}
	}

	#[test]
	fn absent_id_has_no_rank() {
		let records = [record(1, "A"), record(2, "B")];

		assert!(rank_for(&records, 99).is_none());
	}

	#[test]
	fn worked_example() {
		let records = [
			record(1, "A"),
			record(2, "B"),
			record(1, "A"),
			record(1, "A"),
		];

		let entries = leaderboard(&records);

		assert_eq!(entries.len(), 2);
		assert_eq!((entries[0].id, entries[0].count, entries[0].name.as_str()), (1, 3, "A"));
		assert_eq!((entries[1].id, entries[1].count, entries[1].name.as_str()), (2, 1, "B"));

		let ranked = rank_for(&records, 2).expect("player 2 has records");

		assert_eq!((ranked.id, ranked.count, ranked.name.as_str(), ranked.rank), (2, 1, "B", 2));

		assert!(rank_for(&records, 99).is_none());
	}
}
