//! Focus cycling for forms and card grids.

/// Next item after `current`, wrapping to the first
pub fn next<T: Copy + PartialEq>(items: &[T], current: T) -> T {
    step(items, current, 1)
}

/// Item before `current`, wrapping to the last
pub fn prev<T: Copy + PartialEq>(items: &[T], current: T) -> T {
    step(items, current, items.len().saturating_sub(1))
}

fn step<T: Copy + PartialEq>(items: &[T], current: T, offset: usize) -> T {
    match items.iter().position(|item| *item == current) {
        Some(index) if !items.is_empty() => items[(index + offset) % items.len()],
        _ => current,
    }
}

/// Move an index by `delta` inside `0..len`, stopping at the ends
pub fn clamp_step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index
        .saturating_add_signed(delta)
        .min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Field {
        A,
        B,
        C,
    }

    const FIELDS: [Field; 3] = [Field::A, Field::B, Field::C];

    #[test]
    fn test_next_wraps() {
        assert_eq!(next(&FIELDS, Field::A), Field::B);
        assert_eq!(next(&FIELDS, Field::C), Field::A);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(prev(&FIELDS, Field::A), Field::C);
        assert_eq!(prev(&FIELDS, Field::B), Field::A);
    }

    #[test]
    fn test_unknown_item_is_kept() {
        assert_eq!(next(&FIELDS[..1], Field::C), Field::C);
    }

    #[test]
    fn test_clamp_step() {
        assert_eq!(clamp_step(0, -1, 4), 0);
        assert_eq!(clamp_step(3, 1, 4), 3);
        assert_eq!(clamp_step(1, 2, 4), 3);
        assert_eq!(clamp_step(5, 0, 0), 0);
    }
}
