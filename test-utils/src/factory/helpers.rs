//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a valid "comb" layout for the given dimensions.
///
/// The first row is a single east-west corridor and every column hangs south from
/// it, giving a perfect maze with `width * height - 1` passages. Each cell is encoded
/// as one lowercase hex digit of its wall mask (North = 1, East = 2, South = 4,
/// West = 8).
///
/// # Arguments
/// - `width` - Number of columns
/// - `height` - Number of rows
///
/// # Returns
/// - `String` - Row-major layout, one hex digit per cell
pub fn comb_layout(width: u32, height: u32) -> String {
    let mut layout = String::with_capacity((width * height) as usize);

    for y in 0..height {
        for x in 0..width {
            let mut mask = 0u32;
            if y == 0 {
                mask |= 1;
            }
            if x == width - 1 || y > 0 {
                mask |= 2;
            }
            if y == height - 1 {
                mask |= 4;
            }
            if x == 0 || y > 0 {
                mask |= 8;
            }
            layout.push(char::from_digit(mask, 16).unwrap_or('f'));
        }
    }

    layout
}

/// Builds comma separated secret positions `1..=len`.
pub fn sequential_positions(len: usize) -> String {
    (1..=len)
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
