//! Conversions between hex space and pixel space. A [Layout] pins down how
//! hexes are drawn (orientation, size, and where the origin hex sits) and
//! provides every hex<->pixel transform, plus the offset-grid conversions
//! that depend on orientation.

mod config;
mod unit;

pub use self::{config::LayoutConfig, unit::Point};

use crate::{
    error::{HexError, Result},
    hex::{Hex, HexCoordinateValue, HexFrac, HexOff, Parity, HEX_DIM},
};
use log::{debug, warn};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{EnumIter, EnumString};
use validator::Validate;

/// `f64::sqrt` isn't const, so spell it out. This is the closest `f64` to √3.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which way up the hexes are drawn.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// A corner points straight up. Offset grids shove every other row.
    Pointy,
    /// A flat side is on top. Offset grids shove every other column.
    Flat,
}

impl OrientationKind {
    /// Get the transform constants for this orientation
    pub fn orientation(self) -> &'static Orientation {
        match self {
            Self::Pointy => &Orientation::POINTY,
            Self::Flat => &Orientation::FLAT,
        }
    }
}

impl TryFrom<i32> for OrientationKind {
    type Error = HexError;

    /// Map the numeric layout type: `0` is pointy, `1` is flat
    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Pointy),
            1 => Ok(Self::Flat),
            _ => Err(HexError::InvalidArgument {
                what: "orientation",
                value,
            }),
        }
    }
}

/// The linear transform between hex space and (unscaled) pixel space for one
/// orientation. `f0..f3` is the forward matrix (hex -> pixel), `b0..b3` is its
/// inverse (pixel -> hex), both row-major. `start_angle` is the angle of
/// corner 0, in sixths of a full turn.
///
/// There are exactly two of these, [Orientation::POINTY] and
/// [Orientation::FLAT]. The fields are private so no others can be built,
/// which is what lets a [Layout] store just the [OrientationKind]. The
/// inverses are literal constants, not computed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    kind: OrientationKind,
    f0: f64,
    f1: f64,
    f2: f64,
    f3: f64,
    b0: f64,
    b1: f64,
    b2: f64,
    b3: f64,
    start_angle: f64,
}

impl Orientation {
    pub const POINTY: Self = Self {
        kind: OrientationKind::Pointy,
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    pub const FLAT: Self = Self {
        kind: OrientationKind::Flat,
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };

    pub fn kind(&self) -> OrientationKind {
        self.kind
    }

    /// Angle of corner 0, in sixths of a full turn
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Matrix that maps axial `(q, r)` to unscaled pixel space
    pub fn forward_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.f0, self.f1, self.f2, self.f3)
    }

    /// Matrix that maps unscaled pixel space to axial `(q, r)`
    pub fn inverse_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.b0, self.b1, self.b2, self.b3)
    }
}

/// Everything needed to convert between hexes and pixels: which way up the
/// hexes are, how big they are, and where the origin hex is drawn. Also
/// carries the [Parity] used for offset-grid conversions.
///
/// Layouts are validated on creation (see [Layout::new]) and can't be
/// modified afterwards, so every transform here is infallible unless it takes
/// an index. They're tiny and `Copy`, so just make a new one if you need
/// different settings.
///
/// Serializes as a [LayoutConfig], and deserialization goes through the same
/// validation as [Layout::from_config].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayoutConfig", into = "LayoutConfig")]
pub struct Layout {
    kind: OrientationKind,
    parity: Parity,
    size: Point,
    origin: Point,
}

impl Layout {
    /// Create a new layout. Returns an error if either component of `size` is
    /// zero or non-finite, or if `origin` isn't finite.
    pub fn new(
        kind: OrientationKind,
        parity: Parity,
        size: Point,
        origin: Point,
    ) -> Result<Self> {
        if !size.is_finite() || size.x == 0.0 || size.y == 0.0 {
            return Err(HexError::NumericDegeneracy {
                what: "size",
                x: size.x,
                y: size.y,
            });
        }
        if !origin.is_finite() {
            return Err(HexError::NumericDegeneracy {
                what: "origin",
                x: origin.x,
                y: origin.y,
            });
        }

        debug!(
            "Created {:?} layout with {:?} parity, size {}, origin {}",
            kind, parity, size, origin
        );
        Ok(Self {
            kind,
            parity,
            size,
            origin,
        })
    }

    /// Create a layout from a full orientation value rather than a kind. Only
    /// the two shared constants exist, so this is the same as passing
    /// [Orientation::kind] to [Self::new]. Parity defaults to [Parity::Even];
    /// see [Self::with_parity].
    pub fn from_orientation(
        orientation: &Orientation,
        size: Point,
        origin: Point,
    ) -> Result<Self> {
        Self::new(orientation.kind(), Parity::default(), size, origin)
    }

    /// Validate a config and build a layout from it
    pub fn from_config(config: LayoutConfig) -> Result<Self> {
        if let Err(errors) = config.validate() {
            warn!("Rejecting layout config {:?}: {}", config, errors);
            return Err(errors.into());
        }
        Self::new(config.orientation, config.parity, config.size, config.origin)
    }

    /// Get a copy of this layout that uses a different parity for offset
    /// conversions. Everything else stays the same.
    pub fn with_parity(self, parity: Parity) -> Self {
        Self { parity, ..self }
    }

    pub fn kind(&self) -> OrientationKind {
        self.kind
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the transform constants for this layout's orientation
    pub fn orientation(&self) -> &'static Orientation {
        self.kind.orientation()
    }

    /// Get a config that would reproduce this layout
    pub fn config(&self) -> LayoutConfig {
        LayoutConfig {
            orientation: self.kind,
            parity: self.parity,
            size: self.size,
            origin: self.origin,
        }
    }

    /// Get the pixel position of the center of a hex
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let axial = Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        let unscaled = self.orientation().forward_matrix() * axial;
        Point::new(
            unscaled.x * self.size.x + self.origin.x,
            unscaled.y * self.size.y + self.origin.y,
        )
    }

    /// Convert a pixel position to fractional hex coordinates, without
    /// snapping to a hex. Use [Self::pixel_to_hex] to get the hex that
    /// contains the pixel.
    pub fn pixel_to_hex_frac(&self, point: Point) -> HexFrac {
        // Undo the translation and scaling first, so we're left with the pure
        // rotation/shear that the inverse matrix undoes
        let unscaled = Vector2::new(
            (point.x - self.origin.x) / self.size.x,
            (point.y - self.origin.y) / self.size.y,
        );
        let axial = self.orientation().inverse_matrix() * unscaled;
        HexFrac::new(axial.x, axial.y, -axial.x - axial.y)
    }

    /// Get the hex that contains a pixel position. Returns an error if the
    /// point is NaN or so far out that its hex doesn't fit in `i32`
    /// components; see [HexFrac::round].
    pub fn pixel_to_hex(&self, point: Point) -> Result<Hex> {
        self.pixel_to_hex_frac(point).round()
    }

    /// Get the offset from a hex's center to one of its corners. Returns an
    /// error if `corner` isn't in `[0, 6)`.
    pub fn hex_corner_offset(&self, corner: usize) -> Result<Point> {
        if corner >= HEX_DIM {
            return Err(HexError::OutOfRange {
                what: "corner",
                index: corner,
            });
        }
        Ok(self.corner_offset(corner))
    }

    /// Caller is responsible for keeping `corner` in range
    fn corner_offset(&self, corner: usize) -> Point {
        let angle = 2.0
            * PI
            * (self.orientation().start_angle() + corner as f64)
            / HEX_DIM as f64;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get the pixel positions of all 6 corners of a hex, in corner order.
    /// Each call returns its own array.
    pub fn hex_corners(&self, hex: Hex) -> [Point; HEX_DIM] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|corner| center + self.corner_offset(corner))
    }

    /// Get a hex's address in an offset grid. Pointy layouts shove rows,
    /// flat layouts shove columns; this layout's parity decides which ones.
    pub fn hex_to_offset(&self, hex: Hex) -> HexOff {
        match self.kind {
            OrientationKind::Pointy => hex.to_offset_r(self.parity),
            OrientationKind::Flat => hex.to_offset_q(self.parity),
        }
    }

    /// Inverse of [Self::hex_to_offset]
    pub fn offset_to_hex(&self, offset: HexOff) -> Hex {
        match self.kind {
            OrientationKind::Pointy => offset.to_hex_r(self.parity),
            OrientationKind::Flat => offset.to_hex_q(self.parity),
        }
    }

    /// Get the pixel position of the center of the hex stored at an offset
    /// grid address
    pub fn offset_to_pixel(&self, offset: HexOff) -> Point {
        self.hex_to_pixel(self.offset_to_hex(offset))
    }

    /// Get the offset grid address of the hex that contains a pixel position.
    /// Fails the same way as [Self::pixel_to_hex].
    pub fn pixel_to_offset(&self, point: Point) -> Result<HexOff> {
        Ok(self.hex_to_offset(self.pixel_to_hex(point)?))
    }
}

impl Default for Layout {
    fn default() -> Self {
        let config = LayoutConfig::default();
        Self {
            kind: config.orientation,
            parity: config.parity,
            size: config.size,
            origin: config.origin,
        }
    }
}

impl TryFrom<LayoutConfig> for Layout {
    type Error = HexError;

    fn try_from(config: LayoutConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

impl From<Layout> for LayoutConfig {
    fn from(layout: Layout) -> Self {
        layout.config()
    }
}
