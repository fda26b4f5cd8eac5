//! Colour distance
//!
//! sRGB (D65) to CIE L*a*b* conversion and the CIE76 ΔE metric. A ΔE of
//! about 2.3 is the commonly quoted "just noticeable difference", which is
//! where the default tolerance comes from.

use image::Rgba;

/// L*, a*, b* triple
pub type Lab = [f64; 3];

// D65 reference white
const XN: f64 = 0.950_47;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_83;

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Convert an sRGB triple to Lab
pub fn srgb_to_lab(rgb: [u8; 3]) -> Lab {
    let r = srgb_to_linear(rgb[0]);
    let g = srgb_to_linear(rgb[1]);
    let b = srgb_to_linear(rgb[2]);

    let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
    let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b;
    let z = 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Flatten an RGBA pixel onto a white background
pub fn composite_on_white(pixel: Rgba<u8>) -> [u8; 3] {
    let alpha = f64::from(pixel[3]) / 255.0;
    let blend = |c: u8| (f64::from(c) * alpha + 255.0 * (1.0 - alpha)).round() as u8;
    [blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]
}

/// CIE76 distance between two Lab colours
pub fn delta_e76(a: Lab, b: Lab) -> f64 {
    let dl = a[0] - b[0];
    let da = a[1] - b[1];
    let db = a[2] - b[2];
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE76 distance between two RGBA pixels after compositing on white
pub fn pixel_delta_e(a: Rgba<u8>, b: Rgba<u8>) -> f64 {
    if a == b {
        return 0.0;
    }
    delta_e76(
        srgb_to_lab(composite_on_white(a)),
        srgb_to_lab(composite_on_white(b)),
    )
}
