use std::collections::HashMap;

/// Sørensen-Dice coefficient over character bigrams.
///
/// Both inputs are lowercased and stripped of whitespace first. Equal strings
/// score `1.0`; strings sharing no bigram (including anything shorter than two
/// characters that is not equal to the other side) score `0.0`. The score is
/// symmetric in its arguments.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }

    let a_bigrams = bigrams(&a);
    let b_bigrams = bigrams(&b);
    let total = a_bigrams.len() + b_bigrams.len();
    if total == 0 {
        return 0.0;
    }

    let mut remaining: HashMap<(char, char), usize> = HashMap::new();
    for bigram in a_bigrams {
        *remaining.entry(bigram).or_insert(0) += 1;
    }

    let mut shared = 0usize;
    for bigram in b_bigrams {
        if let Some(count) = remaining.get_mut(&bigram) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    (2 * shared) as f64 / total as f64
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn bigrams(text: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
