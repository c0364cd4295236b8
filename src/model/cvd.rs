use glam::{DMat3, DVec3};
use lazy_static::lazy_static;
use std::fmt;

/// Colour vision deficiencies that can be simulated with
/// [`Colour::simulate`](crate::Colour::simulate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// No functioning long-wavelength (red) cones.
    Protanopia,
    /// No functioning medium-wavelength (green) cones.
    Deuteranopia,
    /// No functioning short-wavelength (blue) cones.
    Tritanopia,
    /// Complete colour blindness.
    Achromatopsia,
}

impl Deficiency {
    pub const ALL: [Deficiency; 4] = [Deficiency::Protanopia,
                                      Deficiency::Deuteranopia,
                                      Deficiency::Tritanopia,
                                      Deficiency::Achromatopsia];

    pub fn name(self) -> &'static str {
        match self {
            Deficiency::Protanopia => "Protanopia",
            Deficiency::Deuteranopia => "Deuteranopia",
            Deficiency::Tritanopia => "Tritanopia",
            Deficiency::Achromatopsia => "Achromatopsia",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn rows(m: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols_array_2d(&m).transpose()
}

// Machado, Oliveira & Fernandes (2009), severity 1.
lazy_static! {
    static ref PROTANOPIA: DMat3 = rows([
        [ 0.152286,  1.052583, -0.204868],
        [ 0.114503,  0.786281,  0.099216],
        [-0.003882, -0.048116,  1.051998]]);
    static ref DEUTERANOPIA: DMat3 = rows([
        [ 0.367322,  0.860646, -0.227968],
        [ 0.280085,  0.672501,  0.047413],
        [-0.011820,  0.042940,  0.968881]]);
    static ref TRITANOPIA: DMat3 = rows([
        [ 1.255528, -0.076749, -0.178779],
        [-0.078411,  0.930809,  0.147602],
        [ 0.004733,  0.691367,  0.303900]]);
}

/// Relative luminance weights of linear sRGB.
const LUMINANCE: [f64; 3] = [0.2126729, 0.7151522, 0.0721750];

/// Simulate `deficiency` on a linear-light sRGB triplet.
pub(crate) fn simulate_linear(deficiency: Deficiency, rgb: [f64; 3])
                              -> [f64; 3] {
    let v = DVec3::from_array(rgb);
    let m: &DMat3 = match deficiency {
        Deficiency::Protanopia => &*PROTANOPIA,
        Deficiency::Deuteranopia => &*DEUTERANOPIA,
        Deficiency::Tritanopia => &*TRITANOPIA,
        Deficiency::Achromatopsia => {
            let y = v.dot(DVec3::from_array(LUMINANCE));
            return [y; 3]
        }
    };
    (*m * v).to_array()
}
