//! Deterministic ordering of player scores.

use std::cmp::Ordering;

use super::models::PlayerScore;

/// Sort key used for players who never recorded a valid place
pub const NO_PLACE: u32 = u32::MAX;

/// Total order for the leaderboard
///
/// Descending total, then ascending best place (unplaced players last), then
/// [`compare_names`], so the order never depends on input order.
pub fn rank_order(a: &PlayerScore, b: &PlayerScore) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| {
            a.best_place
                .unwrap_or(NO_PLACE)
                .cmp(&b.best_place.unwrap_or(NO_PLACE))
        })
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Name comparison used for the final tie-break
///
/// Follows Russian dictionary order in levels:
/// 1. letters case-insensitively, with `ё` filed under `е`;
/// 2. `е` before `ё`;
/// 3. lowercase before uppercase, first difference wins;
/// 4. exact spelling.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    primary_letters(&a_lower)
        .cmp(primary_letters(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| uppercase_marks(a).cmp(uppercase_marks(b)))
        .then_with(|| a.cmp(b))
}

fn primary_letters(lower: &str) -> impl Iterator<Item = char> + '_ {
    lower.chars().map(|c| if c == 'ё' { 'е' } else { c })
}

fn uppercase_marks(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.chars().map(char::is_uppercase)
}

/// Sort scores in place by [`rank_order`]
pub fn sort_scores(scores: &mut [PlayerScore]) {
    scores.sort_by(rank_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(name: &str, total: i64, best_place: Option<u32>) -> PlayerScore {
        PlayerScore {
            name: name.to_string(),
            base: total,
            knockout_points: 0,
            total,
            best_place,
        }
    }

    #[test]
    fn test_points_descending() {
        let mut scores = vec![score("A", 5, Some(3)), score("B", 20, Some(1))];
        sort_scores(&mut scores);
        assert_eq!(scores[0].name, "B");
    }

    #[test]
    fn test_best_place_breaks_point_ties() {
        let mut scores = vec![
            score("A", 10, None),
            score("B", 10, Some(4)),
            score("C", 10, Some(2)),
        ];
        sort_scores(&mut scores);
        let names: Vec<_> = scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_name_breaks_remaining_ties() {
        let mut scores = vec![
            score("boris", 0, None),
            score("Anna", 0, None),
            score("Boris", 0, None),
        ];
        sort_scores(&mut scores);
        let names: Vec<_> = scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "boris", "Boris"]);
    }

    #[test]
    fn test_lowercase_sorts_before_uppercase() {
        assert_eq!(compare_names("anna", "Anna"), Ordering::Less);
        assert_eq!(compare_names("Anna", "anna"), Ordering::Greater);
        assert_eq!(compare_names("Anna", "Anna"), Ordering::Equal);
    }

    #[test]
    fn test_yo_files_under_ye() {
        assert_eq!(compare_names("Ёлкин", "Яков"), Ordering::Less);
        assert_eq!(compare_names("Ёлкин", "Жуков"), Ordering::Less);
        assert_eq!(compare_names("Ежов", "Ёлкин"), Ordering::Less);
        assert_eq!(compare_names("Елкин", "Ёлкин"), Ordering::Less);
        assert_eq!(compare_names("ёлкин", "Елкин"), Ordering::Greater);
    }

    #[test]
    fn test_yo_names_rank_among_ye_names() {
        let mut scores = vec![
            score("Яков", 0, None),
            score("Ёлкин", 0, None),
            score("Дмитрий", 0, None),
            score("Ежов", 0, None),
        ];
        sort_scores(&mut scores);
        let names: Vec<_> = scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Дмитрий", "Ежов", "Ёлкин", "Яков"]);
    }

    #[test]
    fn test_cyrillic_names_sort_alphabetically() {
        assert_eq!(compare_names("Артём", "Борис"), Ordering::Less);
        assert_eq!(compare_names("борис", "Вера"), Ordering::Less);
    }
}
