//! Transforms for the colour spaces `palette` does not provide.
//!
//! Every forward transform has an exact inverse so that
//! `from_space(to_space(c)) == c` up to rounding, including for
//! colours outside the sRGB gamut.

use glam::{DMat3, DVec3};
use lazy_static::lazy_static;

/// Build a matrix from its rows.
fn rows(m: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols_array_2d(&m).transpose()
}

#[inline]
fn apply(m: &DMat3, v: [f64; 3]) -> [f64; 3] {
    (*m * DVec3::from_array(v)).to_array()
}

#[inline]
fn signed_pow(x: f64, p: f64) -> f64 { x.abs().powf(p).copysign(x) }

lazy_static! {
    static ref YPBPR: DMat3 = rows([[ 0.299,     0.587,     0.114],
                                    [-0.168736, -0.331264,  0.5],
                                    [ 0.5,      -0.418688, -0.081312]]);
    static ref YPBPR_INV: DMat3 = YPBPR.inverse();
    static ref YUV: DMat3 = rows([[ 0.299,     0.587,     0.114],
                                  [-0.147108, -0.288804,  0.435912],
                                  [ 0.614777, -0.514799, -0.099978]]);
    static ref YUV_INV: DMat3 = YUV.inverse();
    static ref YIQ: DMat3 = rows([[0.299,   0.587,   0.114],
                                  [0.5959, -0.2746, -0.3213],
                                  [0.2115, -0.5227,  0.3112]]);
    static ref YIQ_INV: DMat3 = YIQ.inverse();
    static ref YDBDR: DMat3 = rows([[ 0.299,  0.587, 0.114],
                                    [-0.450, -0.883, 1.333],
                                    [-1.333,  1.116, 0.217]]);
    static ref YDBDR_INV: DMat3 = YDBDR.inverse();

    static ref IPT_LMS: DMat3 = rows([[ 0.4002, 0.7075, -0.0807],
                                      [-0.2280, 1.1500,  0.0612],
                                      [ 0.0,    0.0,     0.9184]]);
    static ref IPT_LMS_INV: DMat3 = IPT_LMS.inverse();
    static ref IPT: DMat3 = rows([[0.4,     0.4,     0.2],
                                  [4.4550, -4.8510,  0.3960],
                                  [0.8056,  0.3572, -1.1628]]);
    static ref IPT_INV: DMat3 = IPT.inverse();

    // XYZ (D65) to ICtCp LMS, through BT.2020 RGB.
    static ref ICTCP_LMS: DMat3 = {
        let bt2020 = rows([[0.6370101914111009, 0.1446150273969693,
                            0.1688447811919299],
                           [0.2627217173616405, 0.6779892755022618,
                            0.0592890071360975],
                           [0.0, 0.0280723288476469, 1.060757671152353]]);
        let lms = rows([[1688. / 4096., 2146. / 4096.,  262. / 4096.],
                        [ 683. / 4096., 2951. / 4096.,  462. / 4096.],
                        [  99. / 4096.,  309. / 4096., 3688. / 4096.]]);
        lms * bt2020.inverse()
    };
    static ref ICTCP_LMS_INV: DMat3 = ICTCP_LMS.inverse();
    static ref ICTCP: DMat3 = rows([[0.5, 0.5, 0.],
                                    [ 6610. / 4096., -13613. / 4096.,
                                      7003. / 4096.],
                                    [17933. / 4096., -17390. / 4096.,
                                      -543. / 4096.]]);
    static ref ICTCP_INV: DMat3 = ICTCP.inverse();

    static ref JZ_LMS: DMat3 = rows([[ 0.41478972, 0.579999, 0.0146480],
                                     [-0.2015100,  1.120649, 0.0531008],
                                     [-0.0166008,  0.264800, 0.6684799]]);
    static ref JZ_LMS_INV: DMat3 = JZ_LMS.inverse();
    static ref JZ_IAB: DMat3 = rows([[0.5,       0.5,       0.],
                                     [3.524000, -4.066708,  0.542708],
                                     [0.199076,  1.096799, -1.295875]]);
    static ref JZ_IAB_INV: DMat3 = JZ_IAB.inverse();

    static ref XYB_OPSIN: DMat3 = rows([[0.3, 0.622, 0.078],
                                        [0.23, 0.692, 0.078],
                                        [0.24342268924547819,
                                         0.20476744424496821,
                                         0.55180986650955360]]);
    static ref XYB_OPSIN_INV: DMat3 = XYB_OPSIN.inverse();
}

// HSI

/// `hue` is the hexagonal hue shared with HSB.
pub(crate) fn hsi_from_rgb([r, g, b]: [f64; 3], hue: f64) -> [f64; 3] {
    let i = (r + g + b) / 3.;
    let s = if i == 0. { 0. } else { 1. - r.min(g).min(b) / i };
    [hue, s, i]
}

pub(crate) fn rgb_from_hsi([h, s, i]: [f64; 3]) -> [f64; 3] {
    let h = h.rem_euclid(360.) / 60.;
    let z = 1. - (h % 2. - 1.).abs();
    let c = 3. * i * s / (1. + z);
    let x = c * z;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.),
        1 => (x, c, 0.),
        2 => (0., c, x),
        3 => (0., x, c),
        4 => (x, 0., c),
        _ => (c, 0., x),
    };
    let m = i * (1. - s);
    [r + m, g + m, b + m]
}

// HPLuv

const EPSILON: f64 = 216. / 24389.;
const KAPPA: f64 = 24389. / 27.;
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [ 3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087,   1.87596750150772,   0.041555057407175],
    [ 0.055630079696993, -0.20397695888897,   1.056971514242878]];

/// Largest chroma reachable at lightness `l` whatever the hue.
fn max_safe_chroma(l: f64) -> f64 {
    let sub1 = (l + 16.).powi(3) / 1560896.;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };
    let mut min = f64::INFINITY;
    for [m1, m2, m3] in XYZ_TO_RGB {
        for t in [0., 1.] {
            let top1 = (284517. * m1 - 94839. * m3) * sub2;
            let top2 = (838422. * m3 + 769860. * m2 + 731718. * m1)
                * l * sub2 - 769860. * t * l;
            let bottom = (632260. * m3 - 126452. * m2) * sub2 + 126452. * t;
            let (slope, intercept) = (top1 / bottom, top2 / bottom);
            min = min.min(intercept.abs() / (slope * slope + 1.).sqrt());
        }
    }
    min
}

/// Lightness of black or white, where the saturation is meaningless.
#[inline]
pub(crate) fn is_extreme_lightness(l: f64) -> bool {
    !(1e-8 ..= 99.9999999).contains(&l)
}

pub(crate) fn hpluv_from_lchuv([l, c, h]: [f64; 3]) -> [f64; 3] {
    let s = if is_extreme_lightness(l) { 0. }
            else { c / max_safe_chroma(l) * 100. };
    [h, s, l]
}

pub(crate) fn lchuv_from_hpluv([h, s, l]: [f64; 3]) -> [f64; 3] {
    let c = if is_extreme_lightness(l) { 0. }
            else { max_safe_chroma(l) / 100. * s };
    [l, c, h]
}

// Luma / chroma families, on gamma-encoded RGB.

pub(crate) fn ypbpr_from_rgb(rgb: [f64; 3]) -> [f64; 3] { apply(&YPBPR, rgb) }
pub(crate) fn rgb_from_ypbpr(v: [f64; 3]) -> [f64; 3] { apply(&YPBPR_INV, v) }

pub(crate) fn ycbcr_from_ypbpr([y, pb, pr]: [f64; 3]) -> [f64; 3] {
    [16. + 219. * y, 128. + 224. * pb, 128. + 224. * pr]
}

pub(crate) fn ypbpr_from_ycbcr([y, cb, cr]: [f64; 3]) -> [f64; 3] {
    [(y - 16.) / 219., (cb - 128.) / 224., (cr - 128.) / 224.]
}

pub(crate) fn ycgco_from_rgb([r, g, b]: [f64; 3]) -> [f64; 3] {
    [0.25 * r + 0.5 * g + 0.25 * b, -0.25 * r + 0.5 * g - 0.25 * b,
     0.5 * r - 0.5 * b]
}

pub(crate) fn rgb_from_ycgco([y, cg, co]: [f64; 3]) -> [f64; 3] {
    let tmp = y - cg;
    [tmp + co, y + cg, tmp - co]
}

pub(crate) fn yuv_from_rgb(rgb: [f64; 3]) -> [f64; 3] { apply(&YUV, rgb) }
pub(crate) fn rgb_from_yuv(v: [f64; 3]) -> [f64; 3] { apply(&YUV_INV, v) }
pub(crate) fn yiq_from_rgb(rgb: [f64; 3]) -> [f64; 3] { apply(&YIQ, rgb) }
pub(crate) fn rgb_from_yiq(v: [f64; 3]) -> [f64; 3] { apply(&YIQ_INV, v) }
pub(crate) fn ydbdr_from_rgb(rgb: [f64; 3]) -> [f64; 3] { apply(&YDBDR, rgb) }
pub(crate) fn rgb_from_ydbdr(v: [f64; 3]) -> [f64; 3] { apply(&YDBDR_INV, v) }

// IPT

const IPT_EXPONENT: f64 = 0.43;

pub(crate) fn ipt_from_xyz(xyz: [f64; 3]) -> [f64; 3] {
    let lms = apply(&IPT_LMS, xyz).map(|v| signed_pow(v, IPT_EXPONENT));
    apply(&IPT, lms)
}

pub(crate) fn xyz_from_ipt(ipt: [f64; 3]) -> [f64; 3] {
    let lms = apply(&IPT_INV, ipt).map(|v| signed_pow(v, 1. / IPT_EXPONENT));
    apply(&IPT_LMS_INV, lms)
}

// Perceptual quantizer (SMPTE ST 2084).

const PQ_M1: f64 = 2610. / 16384.;
const PQ_M2: f64 = 2523. / 4096. * 128.;
const PQ_C1: f64 = 3424. / 4096.;
const PQ_C2: f64 = 2413. / 4096. * 32.;
const PQ_C3: f64 = 2392. / 4096. * 32.;

/// Luminance of the diffuse white, in cd/m², for absolute spaces.
const WHITE_LUMINANCE: f64 = 100.;
const PQ_PEAK: f64 = 10000.;

fn pq_encode(y: f64, m2: f64) -> f64 {
    let ym = y.abs().powf(PQ_M1);
    ((PQ_C1 + PQ_C2 * ym) / (1. + PQ_C3 * ym)).powf(m2).copysign(y)
}

fn pq_decode(e: f64, m2: f64) -> f64 {
    let ep = e.abs().powf(1. / m2);
    let y = ((ep - PQ_C1).max(0.) / (PQ_C2 - PQ_C3 * ep)).powf(1. / PQ_M1);
    y.copysign(e)
}

pub(crate) fn ictcp_from_xyz(xyz: [f64; 3]) -> [f64; 3] {
    let scale = WHITE_LUMINANCE / PQ_PEAK;
    let lms = apply(&ICTCP_LMS, xyz).map(|v| pq_encode(v * scale, PQ_M2));
    apply(&ICTCP, lms)
}

pub(crate) fn xyz_from_ictcp(ictcp: [f64; 3]) -> [f64; 3] {
    let scale = PQ_PEAK / WHITE_LUMINANCE;
    let lms = apply(&ICTCP_INV, ictcp).map(|v| pq_decode(v, PQ_M2) * scale);
    apply(&ICTCP_LMS_INV, lms)
}

// Jzazbz

const JZ_B: f64 = 1.15;
const JZ_G: f64 = 0.66;
const JZ_D: f64 = -0.56;
const JZ_D0: f64 = 1.6295499532821566e-11;
const JZ_M2: f64 = 1.7 * 2523. / 32.;

pub(crate) fn jzazbz_from_xyz(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz.map(|v| v * WHITE_LUMINANCE);
    let xp = JZ_B * x - (JZ_B - 1.) * z;
    let yp = JZ_G * y - (JZ_G - 1.) * x;
    let lms = apply(&JZ_LMS, [xp, yp, z])
        .map(|v| pq_encode(v / PQ_PEAK, JZ_M2));
    let [iz, az, bz] = apply(&JZ_IAB, lms);
    let jz = (1. + JZ_D) * iz / (1. + JZ_D * iz) - JZ_D0;
    [jz, az, bz]
}

pub(crate) fn xyz_from_jzazbz([jz, az, bz]: [f64; 3]) -> [f64; 3] {
    let jz = jz + JZ_D0;
    let iz = jz / (1. + JZ_D - JZ_D * jz);
    let lms = apply(&JZ_IAB_INV, [iz, az, bz])
        .map(|v| pq_decode(v, JZ_M2) * PQ_PEAK);
    let [xp, yp, z] = apply(&JZ_LMS_INV, lms);
    let x = (xp + (JZ_B - 1.) * z) / JZ_B;
    let y = (yp + (JZ_G - 1.) * x) / JZ_G;
    [x, y, z].map(|v| v / WHITE_LUMINANCE)
}

// Polar forms.

pub(crate) fn polar_from_cartesian([l, a, b]: [f64; 3]) -> [f64; 3] {
    [l, a.hypot(b), b.atan2(a).to_degrees().rem_euclid(360.)]
}

pub(crate) fn cartesian_from_polar([l, c, h]: [f64; 3]) -> [f64; 3] {
    let (sin, cos) = h.to_radians().sin_cos();
    [l, c * cos, c * sin]
}

// XYB, on linear RGB.

const XYB_BIAS: f64 = 0.0037930732552754493;

pub(crate) fn xyb_from_linear(rgb: [f64; 3]) -> [f64; 3] {
    let bias = XYB_BIAS.cbrt();
    let [l, m, s] = apply(&XYB_OPSIN, rgb).map(|v| (v + XYB_BIAS).cbrt() - bias);
    [(l - m) / 2., (l + m) / 2., s]
}

pub(crate) fn linear_from_xyb([x, y, b]: [f64; 3]) -> [f64; 3] {
    let bias = XYB_BIAS.cbrt();
    let mixed = [y + x, y - x, b].map(|v| (v + bias).powi(3) - XYB_BIAS);
    apply(&XYB_OPSIN_INV, mixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_close(a: [f64; 3], b: [f64; 3]) {
        for i in 0 .. 3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn hsi_inverse() {
        let rgb = [0.8, 0.3, 0.1];
        // Hexagonal hue of the colour above.
        let hue = 60. * ((0.3 - 0.1) / (0.8 - 0.1));
        assert_close(rgb_from_hsi(hsi_from_rgb(rgb, hue)), rgb);
    }

    #[test]
    fn luma_chroma_inverses() {
        let rgb = [0.2, 0.7, 0.4];
        assert_close(rgb_from_ypbpr(ypbpr_from_rgb(rgb)), rgb);
        assert_close(rgb_from_ycgco(ycgco_from_rgb(rgb)), rgb);
        assert_close(rgb_from_yuv(yuv_from_rgb(rgb)), rgb);
        assert_close(rgb_from_yiq(yiq_from_rgb(rgb)), rgb);
        assert_close(rgb_from_ydbdr(ydbdr_from_rgb(rgb)), rgb);
        let ypbpr = ypbpr_from_rgb(rgb);
        assert_close(ypbpr_from_ycbcr(ycbcr_from_ypbpr(ypbpr)), ypbpr);
    }

    #[test]
    fn ycbcr_studio_range() {
        assert_close(ycbcr_from_ypbpr(ypbpr_from_rgb([0., 0., 0.])),
                     [16., 128., 128.]);
        assert_close(ycbcr_from_ypbpr(ypbpr_from_rgb([1., 1., 1.])),
                     [235., 128., 128.]);
    }

    #[test]
    fn perceptual_inverses() {
        let xyz = [0.3, 0.25, 0.6];
        assert_close(xyz_from_ipt(ipt_from_xyz(xyz)), xyz);
        assert_close(xyz_from_ictcp(ictcp_from_xyz(xyz)), xyz);
        assert_close(xyz_from_jzazbz(jzazbz_from_xyz(xyz)), xyz);
        let lin = [0.05, 0.9, 0.3];
        assert_close(linear_from_xyb(xyb_from_linear(lin)), lin);
    }

    #[test]
    fn black_is_at_the_origin() {
        assert_abs_diff_eq!(ictcp_from_xyz([0.; 3])[0], 0., epsilon = 1e-5);
        assert_abs_diff_eq!(jzazbz_from_xyz([0.; 3])[0], 0., epsilon = 1e-9);
        assert_close(xyb_from_linear([0.; 3]), [0.; 3]);
    }

    #[test]
    fn hpluv_keeps_lightness_and_hue() {
        let lch = [50., 20., 123.];
        let hpluv = hpluv_from_lchuv(lch);
        assert_eq!(hpluv[0], 123.);
        assert_eq!(hpluv[2], 50.);
        assert_close(lchuv_from_hpluv(hpluv), lch);
        assert_eq!(hpluv_from_lchuv([100., 0., 0.])[1], 0.);
    }

    #[test]
    fn polar_round_trip() {
        let lab = [50., -20., -30.];
        let lch = polar_from_cartesian(lab);
        assert!(lch[2] > 180. && lch[2] < 270.);
        assert_close(cartesian_from_polar(lch), lab);
    }
}
