pub mod curve;

pub use curve::{
    ArcSegment, ComposedCurve, CubicBezier, Curve, CurveDomain, Frame, LengthSettings,
    LineSegment, Segmented,
};
