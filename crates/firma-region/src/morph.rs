//! Binary morphology on foreground masks
//!
//! Dilation with a 3x3 square element and Zhang-Suen thinning. Both keep
//! the source dimensions and treat pixels outside the image as background.

use firma_core::BinaryMask;

/// 8-neighbors in clockwise order starting north: N, NE, E, SE, S, SW, W, NW.
const RING: [(i64, i64); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Dilate with a 3x3 square structuring element.
///
/// Separable: a horizontal 3-pixel pass followed by a vertical one.
pub fn dilate_3x3(mask: &BinaryMask) -> BinaryMask {
    let (w, h) = mask.dimensions();
    let mut horizontal = mask.clone();
    for y in 0..h {
        for x in 0..w {
            let (xi, yi) = (x as i64, y as i64);
            if mask.get_signed(xi - 1, yi) || mask.get_signed(xi + 1, yi) {
                horizontal.set(x, y, true);
            }
        }
    }

    let mut out = horizontal.clone();
    for y in 0..h {
        for x in 0..w {
            let (xi, yi) = (x as i64, y as i64);
            if horizontal.get_signed(xi, yi - 1) || horizontal.get_signed(xi, yi + 1) {
                out.set(x, y, true);
            }
        }
    }
    out
}

/// Number of foreground 8-neighbors of (x, y).
pub fn neighbor_count(mask: &BinaryMask, x: u32, y: u32) -> usize {
    let (xi, yi) = (x as i64, y as i64);
    RING.iter()
        .filter(|&&(dx, dy)| mask.get_signed(xi + dx, yi + dy))
        .count()
}

/// Thin the foreground to one-pixel-wide lines (Zhang-Suen).
///
/// Each iteration runs two subpasses that delete boundary pixels with
/// 2 to 6 neighbors and exactly one background-to-foreground transition
/// around them; the first subpass peels south-east boundaries and the
/// second north-west ones. Stops when a full iteration deletes nothing.
/// One-pixel lines and their crossings are already stable.
pub fn thin(mask: &BinaryMask) -> BinaryMask {
    let (w, h) = mask.dimensions();
    let mut out = mask.clone();
    let mut iterations = 0;
    loop {
        let mut changed = false;
        for pass in 0..2 {
            let mut deletions = Vec::new();
            for y in 0..h {
                for x in 0..w {
                    if out.get(x, y) && is_deletable(&out, x, y, pass) {
                        deletions.push((x, y));
                    }
                }
            }
            changed |= !deletions.is_empty();
            for (x, y) in deletions {
                out.set(x, y, false);
            }
        }
        iterations += 1;
        if !changed {
            break;
        }
    }
    tracing::trace!(iterations, "thinning converged");
    out
}

fn is_deletable(mask: &BinaryMask, x: u32, y: u32, pass: usize) -> bool {
    let (xi, yi) = (x as i64, y as i64);
    let p: [bool; 8] = RING.map(|(dx, dy)| mask.get_signed(xi + dx, yi + dy));

    let neighbors = p.iter().filter(|&&v| v).count();
    if !(2..=6).contains(&neighbors) {
        return false;
    }
    let transitions = (0..8).filter(|&i| !p[i] && p[(i + 1) % 8]).count();
    if transitions != 1 {
        return false;
    }

    let (n, e, s, w) = (p[0], p[2], p[4], p[6]);
    if pass == 0 {
        !(n && e && s) && !(e && s && w)
    } else {
        !(n && e && w) && !(n && s && w)
    }
}
