//! Tile coordinates in the Web Mercator / Slippy Map system.
//!
//! Providers only need enough of the tile pyramid to build request URLs:
//! a validated `(row, col, zoom)` triple and the Bing quadkey encoding.

use thiserror::Error;

/// Lowest zoom level of the tile pyramid.
pub const MIN_ZOOM: u8 = 0;

/// Highest zoom level any provider in the catalog can address.
pub const MAX_ZOOM: u8 = 23;

/// Errors produced when validating tile coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    /// Zoom level outside of `MIN_ZOOM..=MAX_ZOOM`
    #[error("Invalid zoom level: {0} (must be between {MIN_ZOOM} and {MAX_ZOOM})")]
    InvalidZoom(u8),

    /// Row or column does not exist at this zoom level
    #[error("Tile ({row}, {col}) does not exist at zoom {zoom} ({per_side} tiles per side)")]
    OutOfRange {
        row: u32,
        col: u32,
        zoom: u8,
        per_side: u32,
    },
}

/// A single tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Y coordinate (north-south), 0 at north
    pub row: u32,
    /// X coordinate (east-west), 0 at west
    pub col: u32,
    /// Zoom level
    pub zoom: u8,
}

impl TileCoord {
    /// Creates a validated tile coordinate.
    pub fn new(row: u32, col: u32, zoom: u8) -> Result<Self, CoordError> {
        if zoom > MAX_ZOOM {
            return Err(CoordError::InvalidZoom(zoom));
        }
        let per_side = tiles_per_side(zoom);
        if row >= per_side || col >= per_side {
            return Err(CoordError::OutOfRange {
                row,
                col,
                zoom,
                per_side,
            });
        }
        Ok(Self { row, col, zoom })
    }

    /// Row index counted from the south edge, as used by TMS servers.
    pub fn tms_row(&self) -> u32 {
        tiles_per_side(self.zoom) - self.row - 1
    }
}

/// Number of tiles along one edge of the pyramid at `zoom`.
#[inline]
pub fn tiles_per_side(zoom: u8) -> u32 {
    1u32 << zoom
}

/// Converts a tile coordinate to a Bing Maps quadkey.
///
/// One base-4 digit per zoom level, most significant first. Zoom 0 yields an
/// empty key.
pub fn tile_to_quadkey(tile: &TileCoord) -> String {
    let mut quadkey = String::with_capacity(tile.zoom as usize);
    for level in (1..=tile.zoom).rev() {
        let mask = 1u32 << (level - 1);
        let mut digit = b'0';
        if tile.col & mask != 0 {
            digit += 1;
        }
        if tile.row & mask != 0 {
            digit += 2;
        }
        quadkey.push(digit as char);
    }
    quadkey
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_quadkey_known_values() {
        let tile = TileCoord {
            row: 5,
            col: 3,
            zoom: 3,
        };
        assert_eq!(tile_to_quadkey(&tile), "213");

        let tile = TileCoord {
            row: 0,
            col: 0,
            zoom: 1,
        };
        assert_eq!(tile_to_quadkey(&tile), "0");
    }

    #[test]
    fn test_quadkey_zoom_zero_is_empty() {
        let tile = TileCoord::new(0, 0, 0).unwrap();
        assert_eq!(tile_to_quadkey(&tile), "");
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let result = TileCoord::new(4, 0, 2);
        assert!(matches!(
            result,
            Err(CoordError::OutOfRange { per_side: 4, .. })
        ));
    }

    #[test]
    fn test_new_rejects_invalid_zoom() {
        assert_eq!(
            TileCoord::new(0, 0, MAX_ZOOM + 1),
            Err(CoordError::InvalidZoom(MAX_ZOOM + 1))
        );
    }

    #[test]
    fn test_tms_row_flips_vertically() {
        let tile = TileCoord::new(0, 0, 2).unwrap();
        assert_eq!(tile.tms_row(), 3);
        let tile = TileCoord::new(3, 1, 2).unwrap();
        assert_eq!(tile.tms_row(), 0);
    }

    proptest! {
        /// Property: a quadkey has exactly one base-4 digit per zoom level.
        #[test]
        fn prop_quadkey_length_matches_zoom(zoom in 0u8..=MAX_ZOOM, seed in any::<u32>()) {
            let per_side = tiles_per_side(zoom);
            let tile = TileCoord::new(seed % per_side, seed.rotate_left(7) % per_side, zoom).unwrap();
            let quadkey = tile_to_quadkey(&tile);
            prop_assert_eq!(quadkey.len(), zoom as usize);
            prop_assert!(quadkey.chars().all(|c| ('0'..='3').contains(&c)));
        }

        /// Property: flipping to TMS rows twice returns the original row.
        #[test]
        fn prop_tms_row_is_involution(zoom in 0u8..=16, seed in any::<u32>()) {
            let per_side = tiles_per_side(zoom);
            let tile = TileCoord::new(seed % per_side, 0, zoom).unwrap();
            let flipped = TileCoord::new(tile.tms_row(), 0, zoom).unwrap();
            prop_assert_eq!(flipped.tms_row(), tile.row);
        }
    }
}
