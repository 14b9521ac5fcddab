use anyhow::{Result, bail};

pub const DEFAULT_SEED: u64 = 1337;

/// Resolve CLI seed tokens into numeric seeds.
///
/// Negative integers use their magnitude. Duplicates keep their first
/// position, and an empty list falls back to [`DEFAULT_SEED`].
///
/// # Errors
///
/// Returns an error for any token that is not an integer.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }

        let seed = if let Ok(value) = token.parse::<i64>() {
            value.unsigned_abs()
        } else if let Ok(value) = token.parse::<u64>() {
            value
        } else {
            bail!("Unrecognized seed token: {token}");
        };

        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }

    if seeds.is_empty() {
        seeds.push(DEFAULT_SEED);
    }

    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn resolves_signed_and_large_seeds() {
        let seeds = resolve_seed_inputs(&tokens(&["42", "-7", "18446744073709551615"])).unwrap();
        assert_eq!(seeds, vec![42, 7, u64::MAX]);
    }

    #[test]
    fn deduplicates_in_order() {
        let seeds = resolve_seed_inputs(&tokens(&["5", "3", "-5", "3"])).unwrap();
        assert_eq!(seeds, vec![5, 3]);
    }

    #[test]
    fn empty_input_uses_default_seed() {
        assert_eq!(resolve_seed_inputs(&[]).unwrap(), vec![DEFAULT_SEED]);
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let err = resolve_seed_inputs(&tokens(&["1", "banana"])).unwrap_err();
        assert!(err.to_string().contains("banana"));
    }
}
