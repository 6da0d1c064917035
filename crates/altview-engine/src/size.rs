use altview_types::{SizeMagnitude, SizeUnit};

const STEP: f64 = 1024.0;

/// Scale a byte count to the largest sensible unit in {B, KB, MB, GB}
///
/// Counts up to 1024 stay in bytes. Larger counts are divided by 1024 and
/// rounded to one decimal per step; a rounded value that reaches 1024 moves
/// on to the next unit. GB is the last unit and absorbs anything larger.
pub fn magnitude(bytes: u64) -> SizeMagnitude {
    if bytes as f64 <= STEP {
        return SizeMagnitude {
            value: bytes as f64,
            unit: SizeUnit::B,
        };
    }

    let mut value = bytes as f64;
    let mut unit = SizeUnit::B;
    while let Some(next) = unit.next() {
        value = round_tenths(value / STEP);
        unit = next;
        if value < STEP {
            break;
        }
    }

    SizeMagnitude { value, unit }
}

/// Human-readable size, e.g. "1023 B" or "1.5 KB"
pub fn format_size(bytes: u64) -> String {
    magnitude(bytes).to_string()
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
