//! RGBA color type and predefined color constants.

/// Represents an RGBA color with 8-bit components.
///
/// Components are stored straight (non-premultiplied); 0 is minimum and 255
/// maximum intensity. An alpha of 255 is fully opaque.
///
/// # Examples
///
/// ```
/// use doodlepad::draw::Color;
/// let red = Color::rgb(255, 0, 0);
/// let translucent_blue = Color { r: 0, g: 0, b: 255, a: 128 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha/opacity (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the color as an RGBA byte quad, as stored in pixel buffers.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

// ============================================================================
// Predefined Color Constants (crayon-box palette)
// ============================================================================

/// Predefined red color
pub const RED: Color = Color::rgb(255, 0, 0);

/// Predefined green color
pub const GREEN: Color = Color::rgb(0, 255, 0);

/// Predefined blue color
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// Predefined yellow color
pub const YELLOW: Color = Color::rgb(255, 255, 0);

/// Predefined orange color
pub const ORANGE: Color = Color::rgb(255, 128, 0);

/// Predefined pink/magenta color
pub const PINK: Color = Color::rgb(255, 0, 255);

/// Predefined white color
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Predefined black color
pub const BLACK: Color = Color::rgb(0, 0, 0);

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};
