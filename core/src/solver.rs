use ndarray::Array2;
use std::collections::BTreeSet;

use crate::*;

/// No dictionary word playable on a small board exceeds this many letters;
/// capping the search depth keeps the DFS bounded on large grids.
const MAX_WORD_LETTERS: usize = 15;

/// Exhaustive search for every word reachable on the board: a DFS from each
/// cell over Chebyshev-adjacent, non-repeating paths, asking `is_word` about
/// each prefix of at least `min_len` letters.
///
/// `is_word` is a plain membership oracle, typically backed by a lexicon's
/// offline set. The result is sorted and deduplicated; two different paths
/// spelling the same word contribute one entry.
pub fn find_all_words<F>(grid: &Grid, min_len: usize, is_word: F) -> BTreeSet<String>
where
    F: Fn(&str) -> bool,
{
    let size = usize::from(grid.size());
    let mut found = BTreeSet::new();
    let mut visited = Array2::from_elem((size, size), false);
    let mut word = String::new();

    fn dfs<F: Fn(&str) -> bool>(
        grid: &Grid,
        coords: Coord2,
        visited: &mut Array2<bool>,
        word: &mut String,
        min_len: usize,
        is_word: &F,
        found: &mut BTreeSet<String>,
    ) {
        let Some(tile) = grid.get(coords) else {
            return;
        };
        if word.len() + tile.letter_count() > MAX_WORD_LETTERS {
            return;
        }

        let len_before = word.len();
        tile.push_lowercase(word);
        visited[coords.to_nd_index()] = true;

        if word.len() >= min_len && is_word(word) {
            found.insert(word.clone());
        }

        for next in grid.iter_neighbors(coords) {
            if !visited[next.to_nd_index()] {
                dfs(grid, next, visited, word, min_len, is_word, found);
            }
        }

        visited[coords.to_nd_index()] = false;
        word.truncate(len_before);
    }

    for (coords, _) in grid.iter_tiles() {
        dfs(
            grid,
            coords,
            &mut visited,
            &mut word,
            min_len,
            &is_word,
            &mut found,
        );
    }
    found
}
