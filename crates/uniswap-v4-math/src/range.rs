use defi_types::{RangePreset, Result, TickRange, UniswapV4Error, MAX_TICK, MIN_TICK};
use tracing::debug;

use crate::tick_math::{max_usable_tick, min_usable_tick, nearest_usable_tick};

/// Distance from the current tick used for a custom bound that was not supplied.
pub const CUSTOM_DEFAULT_HALF_WIDTH: i32 = 10000;

fn check_tick(name: &str, tick: i32) -> Result<()> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(UniswapV4Error::invalid_configuration(format!("{name} {tick} outside [{MIN_TICK}, {MAX_TICK}]")));
    }
    Ok(())
}

/// Resolves a preset, or custom bounds, around `current_tick` into a range usable for `tick_spacing`.
///
/// Bounds are snapped to the nearest usable tick and clamped into the usable tick interval of the spacing.
pub fn resolve_range(
    preset: RangePreset,
    current_tick: i32,
    tick_spacing: i32,
    custom_lower: Option<i32>,
    custom_upper: Option<i32>,
) -> Result<TickRange> {
    if tick_spacing <= 0 {
        return Err(UniswapV4Error::invalid_configuration(format!("tick spacing {tick_spacing} must be positive")));
    }
    check_tick("current tick", current_tick)?;

    let (raw_lower, raw_upper) = match preset.half_width() {
        Some(half_width) => (current_tick - half_width, current_tick + half_width),
        None => {
            if let Some(lower) = custom_lower {
                check_tick("custom lower tick", lower)?;
            }
            if let Some(upper) = custom_upper {
                check_tick("custom upper tick", upper)?;
            }
            (
                custom_lower.unwrap_or(current_tick - CUSTOM_DEFAULT_HALF_WIDTH),
                custom_upper.unwrap_or(current_tick + CUSTOM_DEFAULT_HALF_WIDTH),
            )
        }
    };

    let (min_tick, max_tick) = (min_usable_tick(tick_spacing), max_usable_tick(tick_spacing));
    let tick_lower = nearest_usable_tick(raw_lower, tick_spacing)?.clamp(min_tick, max_tick);
    let tick_upper = nearest_usable_tick(raw_upper, tick_spacing)?.clamp(min_tick, max_tick);

    debug!(%preset, current_tick, tick_spacing, raw_lower, raw_upper, tick_lower, tick_upper, "resolve_range");

    if tick_upper - tick_lower <= 0 {
        return Err(UniswapV4Error::DegenerateRange { tick_lower, tick_upper });
    }
    TickRange::new(tick_lower, tick_upper)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_presets() {
        let range = resolve_range(RangePreset::Wide, 167890, 200, None, None).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (127800, 207800));

        let range = resolve_range(RangePreset::Narrow, 167890, 200, None, None).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (163800, 171800));

        let range = resolve_range(RangePreset::Full, 0, 200, None, None).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (-887200, 887200));
    }

    #[test]
    fn test_full_range_is_clamped() {
        let range = resolve_range(RangePreset::Full, 167890, 200, None, None).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (-719400, 887200));

        let range = resolve_range(RangePreset::Full, -887272, 60, None, None).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (-887220, -60));
    }

    #[test]
    fn test_custom() {
        let range = resolve_range(RangePreset::Custom, 0, 60, Some(-125), Some(250)).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (-120, 240));

        let range = resolve_range(RangePreset::Custom, 1000, 200, None, None).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (-9000, 11000));

        let range = resolve_range(RangePreset::Custom, 1000, 200, Some(0), None).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (0, 11000));

        // preset ignores custom bounds
        let range = resolve_range(RangePreset::Narrow, 0, 200, Some(-10), Some(10)).unwrap();
        assert_eq!((range.tick_lower(), range.tick_upper()), (-4000, 4000));
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(
            resolve_range(RangePreset::Narrow, 0, 10000, None, None),
            Err(UniswapV4Error::DegenerateRange { tick_lower: 0, tick_upper: 0 })
        );
        assert_eq!(
            resolve_range(RangePreset::Custom, 0, 200, Some(350), Some(300)),
            Err(UniswapV4Error::DegenerateRange { tick_lower: 400, tick_upper: 400 })
        );
        assert_eq!(
            resolve_range(RangePreset::Custom, 0, 200, Some(1000), Some(-1000)),
            Err(UniswapV4Error::DegenerateRange { tick_lower: 1000, tick_upper: -1000 })
        );
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(resolve_range(RangePreset::Wide, 0, 0, None, None), Err(UniswapV4Error::InvalidConfiguration(_))));
        assert!(matches!(resolve_range(RangePreset::Wide, 900000, 60, None, None), Err(UniswapV4Error::InvalidConfiguration(_))));
        assert!(matches!(
            resolve_range(RangePreset::Custom, 0, 60, Some(-900000), None),
            Err(UniswapV4Error::InvalidConfiguration(_))
        ));
    }
}
