//! Hand-modeled mesh arrays for the tabletop still life.
//!
//! Plain triangle lists, no indices. The normals and texture coordinates
//! are part of the modeled data and are uploaded verbatim.

use crate::vertex::{Vertex, v};

/// Table surface: a single textured quad at y = -0.5.
#[rustfmt::skip]
pub const PLANE: &[Vertex] = &[
    v([ 2.0, -0.5,  4.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([ 2.0, -0.5, -4.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-2.0, -0.5, -4.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-2.0, -0.5,  4.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 2.0, -0.5,  4.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-2.0, -0.5, -4.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
];

/// Drink coaster: a thin slab sitting on the table next to the stand.
#[rustfmt::skip]
pub const COASTER: &[Vertex] = &[
    // near edge
    v([0.0, -0.50, 1.5], [ 0.0, 0.0, -1.0], [0.0, 0.0]),
    v([1.0, -0.50, 1.5], [ 0.0, 0.0, -1.0], [1.0, 0.0]),
    v([1.0, -0.45, 1.5], [ 0.0, 0.0, -1.0], [1.0, 1.0]),
    v([1.0, -0.45, 1.5], [ 0.0, 0.0, -1.0], [1.0, 1.0]),
    v([0.0, -0.45, 1.5], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.0, -0.50, 1.5], [ 0.0, 0.0, -1.0], [0.0, 0.0]),
    // far edge
    v([0.0, -0.50, 2.5], [ 1.0, 0.0,  0.0], [0.0, 0.0]),
    v([1.0, -0.50, 2.5], [ 1.0, 0.0,  0.0], [1.0, 0.0]),
    v([1.0, -0.45, 2.5], [ 1.0, 0.0,  0.0], [1.0, 1.0]),
    v([1.0, -0.45, 2.5], [ 1.0, 0.0,  0.0], [1.0, 1.0]),
    v([0.0, -0.45, 2.5], [ 1.0, 0.0,  0.0], [0.0, 1.0]),
    v([0.0, -0.50, 2.5], [ 1.0, 0.0,  0.0], [0.0, 0.0]),
    // left edge
    v([0.0, -0.45, 2.5], [-1.0, 0.0,  0.0], [1.0, 0.0]),
    v([0.0, -0.45, 1.5], [-1.0, 0.0,  0.0], [1.0, 1.0]),
    v([0.0, -0.50, 1.5], [-1.0, 0.0,  0.0], [0.0, 1.0]),
    v([0.0, -0.50, 1.5], [-1.0, 0.0,  0.0], [0.0, 1.0]),
    v([0.0, -0.50, 2.5], [-1.0, 0.0,  0.0], [0.0, 0.0]),
    v([0.0, -0.45, 2.5], [-1.0, 0.0,  0.0], [1.0, 0.0]),
    // right edge
    v([1.0, -0.45, 2.5], [ 0.0, 0.0,  1.0], [1.0, 0.0]),
    v([1.0, -0.45, 1.5], [ 0.0, 0.0,  1.0], [1.0, 1.0]),
    v([1.0, -0.50, 1.5], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([1.0, -0.50, 1.5], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([1.0, -0.50, 2.5], [ 0.0, 0.0,  1.0], [0.0, 0.0]),
    v([1.0, -0.45, 2.5], [ 0.0, 0.0,  1.0], [1.0, 0.0]),
    // underside
    v([0.0, -0.50, 1.5], [ 0.0, 1.0,  0.0], [0.0, 1.0]),
    v([1.0, -0.50, 1.5], [ 0.0, 1.0,  0.0], [1.0, 1.0]),
    v([1.0, -0.50, 2.5], [ 0.0, 1.0,  0.0], [1.0, 0.0]),
    v([1.0, -0.50, 2.5], [ 0.0, 1.0,  0.0], [1.0, 0.0]),
    v([0.0, -0.50, 2.5], [ 0.0, 1.0,  0.0], [0.0, 0.0]),
    v([0.0, -0.50, 1.5], [ 0.0, 1.0,  0.0], [0.0, 1.0]),
    // top face
    v([0.0, -0.45, 1.5], [ 0.0, -1.0, 0.0], [0.0, 1.0]),
    v([1.0, -0.45, 1.5], [ 0.0, -1.0, 0.0], [1.0, 1.0]),
    v([1.0, -0.45, 2.5], [ 0.0, -1.0, 0.0], [1.0, 0.0]),
    v([1.0, -0.45, 2.5], [ 0.0, -1.0, 0.0], [1.0, 0.0]),
    v([0.0, -0.45, 2.5], [ 0.0, -1.0, 0.0], [0.0, 0.0]),
    v([0.0, -0.45, 1.5], [ 0.0, -1.0, 0.0], [0.0, 1.0]),
];

/// Candle stand: an octagonal top dish over a square pedestal.
#[rustfmt::skip]
pub const STAND: &[Vertex] = &[
    // dish: octagon fan around the origin
    v([ 0.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.7, 0.0,  0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.0, 0.0,  1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.0, 0.0,  1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.7, 0.0,  0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.7, 0.0,  0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 1.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 1.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.7, 0.0, -0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.7, 0.0, -0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.7, 0.0, -0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.7, 0.0, -0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-1.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-1.0, 0.0,  0.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.7, 0.0,  0.7], [0.0, 1.0, 0.0], [0.0, 1.0]),

    // pedestal
    v([-0.3, -0.5, -0.3], [ 0.0, 0.0, -1.0], [0.0, 0.0]),
    v([ 0.3, -0.5, -0.3], [ 0.0, 0.0, -1.0], [1.0, 0.0]),
    v([ 0.3,  0.0, -0.3], [ 0.0, 0.0, -1.0], [1.0, 1.0]),
    v([ 0.3,  0.0, -0.3], [ 0.0, 0.0, -1.0], [1.0, 1.0]),
    v([-0.3,  0.0, -0.3], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([-0.3, -0.5, -0.3], [ 0.0, 0.0, -1.0], [0.0, 0.0]),

    v([-0.3, -0.5,  0.3], [ 1.0, 0.0,  0.0], [0.0, 0.0]),
    v([ 0.3, -0.5,  0.3], [ 1.0, 0.0,  0.0], [1.0, 0.0]),
    v([ 0.3,  0.0,  0.3], [ 1.0, 0.0,  0.0], [1.0, 1.0]),
    v([ 0.3,  0.0,  0.3], [ 1.0, 0.0,  0.0], [1.0, 1.0]),
    v([-0.3,  0.0,  0.3], [ 1.0, 0.0,  0.0], [0.0, 1.0]),
    v([-0.3, -0.5,  0.3], [ 1.0, 0.0,  0.0], [0.0, 0.0]),

    v([-0.3,  0.0,  0.3], [-1.0, 0.0,  0.0], [1.0, 0.0]),
    v([-0.3,  0.0, -0.3], [-1.0, 0.0,  0.0], [1.0, 1.0]),
    v([-0.3, -0.5, -0.3], [-1.0, 0.0,  0.0], [0.0, 1.0]),
    v([-0.3, -0.5, -0.3], [-1.0, 0.0,  0.0], [0.0, 1.0]),
    v([-0.3, -0.5,  0.3], [-1.0, 0.0,  0.0], [0.0, 0.0]),
    v([-0.3,  0.0,  0.3], [-1.0, 0.0,  0.0], [1.0, 0.0]),

    v([ 0.3,  0.0,  0.3], [ 0.0, 0.0,  1.0], [1.0, 0.0]),
    v([ 0.3,  0.0, -0.3], [ 0.0, 0.0,  1.0], [1.0, 1.0]),
    v([ 0.3, -0.5, -0.3], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([ 0.3, -0.5, -0.3], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([ 0.3, -0.5,  0.3], [ 0.0, 0.0,  1.0], [0.0, 0.0]),
    v([ 0.3,  0.0,  0.3], [ 0.0, 0.0,  1.0], [1.0, 0.0]),

    v([-0.3, -0.5, -0.3], [ 0.0, 1.0,  0.0], [0.0, 1.0]),
    v([ 0.3, -0.5, -0.3], [ 0.0, 1.0,  0.0], [1.0, 1.0]),
    v([ 0.3, -0.5,  0.3], [ 0.0, 1.0,  0.0], [1.0, 0.0]),
    v([ 0.3, -0.5,  0.3], [ 0.0, 1.0,  0.0], [1.0, 0.0]),
    v([-0.3, -0.5,  0.3], [ 0.0, 1.0,  0.0], [0.0, 0.0]),
    v([-0.3, -0.5, -0.3], [ 0.0, 1.0,  0.0], [0.0, 1.0]),
];

/// Cup: an octagonal base flaring out to a wider octagonal rim.
#[rustfmt::skip]
pub const CUP: &[Vertex] = &[
    // base: octagon fan around (0.5, -0.449, 2.0)
    v([0.500, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.325, -0.449, 2.175], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.500, -0.449, 2.250], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([0.500, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.500, -0.449, 2.250], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.675, -0.449, 2.175], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([0.500, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.675, -0.449, 2.175], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.750, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([0.500, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.750, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.675, -0.449, 1.825], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([0.500, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.675, -0.449, 1.825], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.500, -0.449, 1.750], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([0.500, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.500, -0.449, 1.750], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.325, -0.449, 1.825], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([0.500, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.325, -0.449, 1.825], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.250, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([0.500, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.250, -0.449, 2.000], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.325, -0.449, 2.175], [0.0, 1.0, 0.0], [0.0, 1.0]),

    // wall panels, base ring up to the rim
    v([0.260,  0.50, 2.240], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.500,  0.50, 2.340], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.325, -0.45, 2.175], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.325, -0.45, 2.175], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.500, -0.45, 2.250], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.500,  0.50, 2.340], [ 0.0, 0.0,  1.0], [0.0, 1.0]),

    v([0.500,  0.50, 2.340], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.740,  0.50, 2.240], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.500, -0.45, 2.250], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.500, -0.45, 2.250], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.675, -0.45, 2.175], [ 0.0, 0.0,  1.0], [0.0, 1.0]),
    v([0.740,  0.50, 2.240], [ 0.0, 0.0,  1.0], [0.0, 1.0]),

    v([0.740,  0.50, 2.240], [ 1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.850,  0.50, 2.000], [ 1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.675, -0.45, 2.175], [ 1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.675, -0.45, 2.175], [ 1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.750, -0.45, 2.000], [ 1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.850,  0.50, 2.000], [ 1.0, 0.0, -0.2], [0.0, 1.0]),

    v([0.850,  0.50, 2.000], [ 1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.740,  0.50, 1.760], [ 1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.750, -0.45, 2.000], [ 1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.750, -0.45, 2.000], [ 1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.675, -0.45, 1.825], [ 1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.740,  0.50, 1.760], [ 1.0, 0.0, -0.5], [0.0, 1.0]),

    v([0.740,  0.50, 1.760], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.500,  0.50, 1.650], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.675, -0.45, 1.825], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.675, -0.45, 1.825], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.500, -0.45, 1.750], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.500,  0.50, 1.650], [ 0.0, 0.0, -1.0], [0.0, 1.0]),

    v([0.500,  0.50, 1.650], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.260,  0.50, 1.760], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.500, -0.45, 1.750], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.500, -0.45, 1.750], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.325, -0.45, 1.825], [ 0.0, 0.0, -1.0], [0.0, 1.0]),
    v([0.260,  0.50, 1.760], [ 0.0, 0.0, -1.0], [0.0, 1.0]),

    v([0.260,  0.50, 1.760], [-1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.150,  0.50, 2.000], [-1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.325, -0.45, 1.825], [-1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.325, -0.45, 1.825], [-1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.250, -0.45, 2.000], [-1.0, 0.0, -0.5], [0.0, 1.0]),
    v([0.150,  0.50, 2.000], [-1.0, 0.0, -0.5], [0.0, 1.0]),

    v([0.150,  0.50, 2.000], [-1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.260,  0.50, 2.240], [-1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.250, -0.45, 2.000], [-1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.250, -0.45, 2.000], [-1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.325, -0.45, 2.175], [-1.0, 0.0, -0.2], [0.0, 1.0]),
    v([0.260,  0.50, 2.240], [-1.0, 0.0, -0.2], [0.0, 1.0]),
];

/// Candle body: an octagonal prism resting in the stand's dish.
#[rustfmt::skip]
pub const CANDLE: &[Vertex] = &[
    // base: octagon fan just above the dish
    v([ 0.00, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.01,  0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.01,  0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.01, -0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.01, -0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),

    // wall panels
    v([-0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([ 0.00, 0.01,  0.50], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-0.35, 0.30,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.30,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.30,  0.50], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([ 0.00, 0.01,  0.50], [0.0, 1.0, 0.0], [1.0, 0.0]),

    v([ 0.00, 0.01,  0.50], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([ 0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([ 0.00, 0.30,  0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.30,  0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.30,  0.35], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([ 0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [1.0, 0.0]),

    v([ 0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([ 0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([ 0.35, 0.30,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.30,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.50, 0.30,  0.00], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([ 0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [1.0, 0.0]),

    v([ 0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([ 0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([ 0.50, 0.30,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.50, 0.30,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.30, -0.35], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([ 0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [1.0, 0.0]),

    v([ 0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([ 0.00, 0.01, -0.50], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([ 0.35, 0.30, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.30, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.30, -0.50], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([ 0.00, 0.01, -0.50], [0.0, 1.0, 0.0], [1.0, 0.0]),

    v([ 0.00, 0.01, -0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([ 0.00, 0.30, -0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.30, -0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.30, -0.35], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [1.0, 0.0]),

    v([-0.35, 0.01, -0.35], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-0.35, 0.30, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.30, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.50, 0.30,  0.00], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [1.0, 0.0]),

    v([-0.50, 0.01,  0.00], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-0.50, 0.30,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.50, 0.30,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.30,  0.35], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([-0.35, 0.01,  0.35], [0.0, 1.0, 0.0], [1.0, 0.0]),
];

/// Lid: an octagonal cap sitting on the candle body.
#[rustfmt::skip]
pub const LID: &[Vertex] = &[
    // cap: octagon fan at the top
    v([ 0.00, 0.4,  0.00], [0.0, 1.0, 0.0], [0.5, 0.5]),
    v([-0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.4,  0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.4,  0.00], [0.0, 1.0, 0.0], [0.5, 0.5]),
    v([ 0.00, 0.4,  0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.4,  0.00], [0.0, 1.0, 0.0], [0.5, 0.5]),
    v([ 0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.4,  0.00], [0.0, 1.0, 0.0], [0.5, 0.5]),
    v([ 0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.4,  0.00], [0.0, 1.0, 0.0], [0.5, 0.5]),
    v([ 0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([ 0.00, 0.4, -0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.4,  0.00], [0.0, 1.0, 0.0], [0.5, 0.5]),
    v([ 0.00, 0.4, -0.50], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.4,  0.00], [0.0, 1.0, 0.0], [0.5, 0.5]),
    v([-0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),

    v([ 0.00, 0.4,  0.00], [0.0, 1.0, 0.0], [0.5, 0.5]),
    v([-0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([-0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.0, 1.0]),

    // skirt: one u-v band per panel, wrapping around the rim
    v([-0.35, 0.3,  0.35], [0.0, 1.0, 0.0], [0.0, 0.000]),
    v([ 0.00, 0.3,  0.50], [0.0, 1.0, 0.0], [0.0, 0.125]),
    v([-0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.4, 0.000]),
    v([-0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.4, 0.000]),
    v([ 0.00, 0.4,  0.50], [0.0, 1.0, 0.0], [0.4, 0.125]),
    v([ 0.00, 0.3,  0.50], [0.0, 1.0, 0.0], [0.0, 0.125]),

    v([ 0.00, 0.3,  0.50], [0.0, 1.0, 0.0], [0.0, 0.125]),
    v([ 0.35, 0.3,  0.35], [0.0, 1.0, 0.0], [0.0, 0.250]),
    v([ 0.00, 0.4,  0.50], [0.0, 1.0, 0.0], [0.4, 0.125]),
    v([ 0.00, 0.4,  0.50], [0.0, 1.0, 0.0], [0.4, 0.125]),
    v([ 0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.4, 0.250]),
    v([ 0.35, 0.3,  0.35], [0.0, 1.0, 0.0], [0.0, 0.250]),

    v([ 0.35, 0.3,  0.35], [0.0, 1.0, 0.0], [0.0, 0.250]),
    v([ 0.50, 0.3,  0.00], [0.0, 1.0, 0.0], [0.0, 0.375]),
    v([ 0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.4, 0.250]),
    v([ 0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.4, 0.250]),
    v([ 0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.4, 0.375]),
    v([ 0.50, 0.3,  0.00], [0.0, 1.0, 0.0], [0.0, 0.375]),

    v([ 0.50, 0.3,  0.00], [0.0, 1.0, 0.0], [0.0, 0.375]),
    v([ 0.35, 0.3, -0.35], [0.0, 1.0, 0.0], [0.0, 0.500]),
    v([ 0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.4, 0.375]),
    v([ 0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.4, 0.375]),
    v([ 0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.4, 0.500]),
    v([ 0.35, 0.3, -0.35], [0.0, 1.0, 0.0], [0.0, 0.500]),

    v([ 0.35, 0.3, -0.35], [0.0, 1.0, 0.0], [0.0, 0.500]),
    v([ 0.00, 0.3, -0.50], [0.0, 1.0, 0.0], [0.0, 0.625]),
    v([ 0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.4, 0.500]),
    v([ 0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.4, 0.500]),
    v([ 0.00, 0.4, -0.50], [0.0, 1.0, 0.0], [0.4, 0.625]),
    v([ 0.00, 0.3, -0.50], [0.0, 1.0, 0.0], [0.0, 0.625]),

    v([ 0.00, 0.3, -0.50], [0.0, 1.0, 0.0], [0.0, 0.625]),
    v([-0.35, 0.3, -0.35], [0.0, 1.0, 0.0], [0.0, 0.750]),
    v([ 0.00, 0.4, -0.50], [0.0, 1.0, 0.0], [0.4, 0.625]),
    v([ 0.00, 0.4, -0.50], [0.0, 1.0, 0.0], [0.4, 0.625]),
    v([-0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.4, 0.750]),
    v([-0.35, 0.3, -0.35], [0.0, 1.0, 0.0], [0.0, 0.750]),

    v([-0.35, 0.3, -0.35], [0.0, 1.0, 0.0], [0.0, 0.750]),
    v([-0.50, 0.3,  0.00], [0.0, 1.0, 0.0], [0.0, 0.875]),
    v([-0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.4, 0.750]),
    v([-0.35, 0.4, -0.35], [0.0, 1.0, 0.0], [0.4, 0.750]),
    v([-0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.4, 0.875]),
    v([-0.50, 0.3,  0.00], [0.0, 1.0, 0.0], [0.0, 0.875]),

    v([-0.50, 0.3,  0.00], [0.0, 1.0, 0.0], [0.0, 0.875]),
    v([-0.35, 0.3,  0.35], [0.0, 1.0, 0.0], [0.0, 1.000]),
    v([-0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.4, 0.875]),
    v([-0.50, 0.4,  0.00], [0.0, 1.0, 0.0], [0.4, 0.875]),
    v([-0.35, 0.4,  0.35], [0.0, 1.0, 0.0], [0.4, 1.000]),
    v([-0.35, 0.3,  0.35], [0.0, 1.0, 0.0], [0.0, 1.000]),
];

/// Light indicator: a small four-sided pyramid drawn by the unlit program
/// at the light's position.
#[rustfmt::skip]
pub const LAMP: &[Vertex] = &[
    v([ 0.0, 1.0,  0.0], [ 0.0, 0.5,  1.0], [0.5, 1.0]),
    v([-0.5, 0.0,  0.5], [ 0.0, 0.5,  1.0], [0.0, 0.0]),
    v([ 0.5, 0.0,  0.5], [ 0.0, 0.5,  1.0], [1.0, 0.0]),

    v([ 0.0, 1.0,  0.0], [ 1.0, 0.5,  0.0], [0.5, 1.0]),
    v([-0.5, 0.0,  0.5], [ 1.0, 0.5,  0.0], [0.0, 0.0]),
    v([-0.5, 0.0, -0.5], [ 1.0, 0.5,  0.0], [1.0, 0.0]),

    v([ 0.0, 1.0,  0.0], [ 0.0, 0.5, -1.0], [0.5, 1.0]),
    v([-0.5, 0.0, -0.5], [ 0.0, 0.5, -1.0], [0.0, 0.0]),
    v([ 0.5, 0.0, -0.5], [ 0.0, 0.5, -1.0], [1.0, 0.0]),

    v([ 0.0, 1.0,  0.0], [-1.0, 0.5,  0.0], [0.5, 1.0]),
    v([ 0.5, 0.0, -0.5], [-1.0, 0.5,  0.0], [0.0, 0.0]),
    v([ 0.5, 0.0,  0.5], [-1.0, 0.5,  0.0], [1.0, 0.0]),

    v([-0.5, 0.0, -0.5], [ 0.0, -1.0, 0.0], [0.0, 0.0]),
    v([ 0.5, 0.0,  0.5], [ 0.0, -1.0, 0.0], [1.0, 1.0]),
    v([-0.5, 0.0,  0.5], [ 0.0, -1.0, 0.0], [0.0, 1.0]),
    v([-0.5, 0.0, -0.5], [ 0.0, -1.0, 0.0], [0.0, 0.0]),
    v([ 0.5, 0.0,  0.5], [ 0.0, -1.0, 0.0], [1.0, 1.0]),
    v([ 0.5, 0.0, -0.5], [ 0.0, -1.0, 0.0], [1.0, 0.0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meshes_are_triangle_lists() {
        for (name, mesh) in [
            ("plane", PLANE),
            ("coaster", COASTER),
            ("stand", STAND),
            ("cup", CUP),
            ("candle", CANDLE),
            ("lid", LID),
            ("lamp", LAMP),
        ] {
            assert_eq!(mesh.len() % 3, 0, "{name} is not a whole triangle list");
            assert!(!mesh.is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn expected_vertex_counts() {
        assert_eq!(PLANE.len(), 6);
        assert_eq!(COASTER.len(), 36);
        assert_eq!(STAND.len(), 54);
        assert_eq!(CUP.len(), 72);
        assert_eq!(CANDLE.len(), 72);
        assert_eq!(LID.len(), 72);
        assert_eq!(LAMP.len(), 18);
    }

    #[test]
    fn plane_lies_on_the_table_surface() {
        assert!(PLANE.iter().all(|v| v.position[1] == -0.5));
    }
}
