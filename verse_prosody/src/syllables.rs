// Heuristic English syllable estimator.
//
// Maps a line of text to an approximate syllable count from vowel clusters
// alone: no dictionary, no phoneme model, no locale. The estimate drives the
// editor's live gutter, so it has to be cheap enough to rerun on every
// keystroke and stable enough that the form tolerances in `forms.rs` stay
// calibrated against it.
//
// Per word (after lowercasing and dropping everything but `a-z` and spaces):
// - words of 3 letters or fewer count as 1
// - otherwise drop a trailing "Xes", "ed" or "Xe" (X not in `laeiouy`),
//   then a single leading 'y', and count maximal runs of `aeiouy`
// - a word never counts as less than 1
//
// Known misses (silent-e plurals, diphthong splits, contractions) are part of
// the contract. The sample poems and the tolerance ranges assume them.

/// Characters counted as vowels when looking for syllable nuclei.
const VOWELS: &[u8] = b"aeiouy";

/// Characters that block suffix stripping when they precede "es" / "e".
const SUFFIX_GUARD: &[u8] = b"laeiouy";

/// Words at or under this length always count as one syllable.
const SHORT_WORD_LEN: usize = 3;

/// Estimate the number of syllables in `text`.
///
/// Whitespace-only and empty input yields 0. Every other word contributes at
/// least 1. Deterministic and allocation-light.
pub fn estimate_syllables(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect();

    normalized.split_whitespace().map(word_syllables).sum()
}

/// Syllable estimate for a single normalized word (ASCII lowercase only).
fn word_syllables(word: &str) -> usize {
    if word.len() <= SHORT_WORD_LEN {
        return 1;
    }

    let stem = strip_silent_suffix(word);
    let stem = stem.strip_prefix('y').unwrap_or(stem);

    vowel_runs(stem).max(1)
}

/// Drop a trailing "Xes", "ed" or "Xe", where X is not in `SUFFIX_GUARD`.
///
/// X is removed along with the suffix. It is never a vowel, so the vowel-run
/// count of the remainder is unaffected either way.
fn strip_silent_suffix(word: &str) -> &str {
    let bytes = word.as_bytes();
    let len = bytes.len();
    let unguarded = |i: usize| !SUFFIX_GUARD.contains(&bytes[i]);

    if len >= 3 && word.ends_with("es") && unguarded(len - 3) {
        &word[..len - 3]
    } else if word.ends_with("ed") {
        &word[..len - 2]
    } else if len >= 2 && word.ends_with('e') && unguarded(len - 2) {
        &word[..len - 2]
    } else {
        word
    }
}

/// Count maximal runs of vowel characters.
fn vowel_runs(stem: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for b in stem.bytes() {
        let is_vowel = VOWELS.contains(&b);
        if is_vowel && !in_run {
            runs += 1;
        }
        in_run = is_vowel;
    }
    runs
}
