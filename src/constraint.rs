//! The single constraint of the puzzle: a filled cell's four corner letters,
//! taken as a multiset, must equal the letters of the cell's word.

/// Check a cell's word against the current values of its four corners.
///
/// While any corner is still unassigned the constraint is deferred and
/// reported as satisfied, so partial assignments are never rejected early.
/// Once all four corners hold letters the check is exact multiset equality,
/// done by comparing the pre-sorted word letters against the sorted corner
/// letters. A word that is not four letters long can never equal four
/// corners; it is not an error, just permanently unsatisfiable.
pub(crate) fn word_matches_corners(sorted_word: &[char], corners: [Option<char>; 4]) -> bool {
    let mut letters = ['\0'; 4];
    for (slot, corner) in letters.iter_mut().zip(corners) {
        match corner {
            Some(letter) => *slot = letter,
            None => return true,
        }
    }

    if sorted_word.len() != letters.len() {
        return false;
    }

    letters.sort_unstable();
    sorted_word == letters.as_slice()
}
