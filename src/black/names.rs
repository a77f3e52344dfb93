//! Fixed name tables for the records this crate knows how to extract.
//!
//! The `.black` format has no public schema; these lists were assembled by
//! surveying the string tables of the planet template files shipped with the
//! client. A name missing from a given file is normal and not an error.

/// Texture slot names that can bind a `res:` path in planet templates.
pub const TEXTURE_SLOT_NAMES: [&str; 23] = [
    "DistortionMap",
    "HeightMap",
    "NoiseMap",
    "PolesMaskMap",
    "RingsTexture",
    "ColorGradientMap",
    "GradientMap",
    "MaskMap",
    "NoiseTexture",
    "FillTexture",
    "CloudsTexture",
    "CloudCapTexture",
    "CityLight",
    "NormalHeight1",
    "NormalHeight2",
    "Lava3DNoiseMap",
    "LightningMap",
    "GroundScattering1",
    "GroundScattering2",
    "PolesGradient",
    "ColorizeMap",
    "CityDistributionMask",
    "CityDistributionTexture",
];

/// Names of 4-component shader parameters found in planet templates.
pub const VEC4_PARAM_NAMES: [&str; 33] = [
    // Gas giant
    "WindFactors",
    "BandingSpeed",
    "CapColor",
    "DistoFactors",
    "Saturation",
    "RingsFactors",
    "ringColor1",
    "ringColor2",
    "ringColor3",
    "Alpha",
    // Ice
    "IceFactors",
    "IceDetail",
    "IceSpecular",
    "IceRampColorLow",
    "IceRampColorMiddle",
    "IceRampColorHigh",
    // Lava
    "AnimationFactors",
    "DetailFactors",
    "LavaColor1",
    "LavaColor2",
    "LavaSpecular",
    "MiscFactors",
    // Atmosphere
    "AtmosphereFactors",
    "ScatteringFactors",
    "AtmosphereColor",
    // Common
    "ColorParams",
    "GeometryDeformation",
    "GeometryAnimation",
    "CloudSpeed",
    "CloudsColor",
    "CloudsFactors",
    // Thunderstorm
    "LightningColor",
    "LightningFactors",
];

/// Extension-less texture paths that were moved between planet types in the
/// converted asset set. Applied after normalization.
pub const TEXTURE_REMAPS: [(&str, &str); 2] = [
    ("plasma/plasma_lightning01_g", "thunderstorm/lightning01_g"),
    ("plasma/plasma_lightning02_g", "thunderstorm/lightning02_g"),
];
