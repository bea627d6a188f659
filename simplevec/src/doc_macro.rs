//! Renders `svgbob` diagrams in doc comments when the `doc` feature is on. Without it, the doc
//! lines are joined back into a plain string and the diagrams show as text.

#[cfg(feature = "doc")]
macro_rules! make_svgbobdoc {
    ($($doc:tt)*) => (
        svgbobdoc::transform!($($doc)*)
    )
}

#[cfg(not(feature = "doc"))]
macro_rules! make_svgbobdoc {
    ($( #![doc = $line:literal] )*) => (
        core::concat!($( $line, '\n' ),*)
    );
    ($( #[doc = $line:literal] )*) => (
        core::concat!($( $line, '\n' ),*)
    );
}

pub(crate) use make_svgbobdoc;
