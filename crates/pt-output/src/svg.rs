//! SVG projection of a [`RenderFrame`].
//!
//! Each print becomes a `<g>` centred on its position, rotated by its
//! rotation and scaled so the glyph view box spans `size` pixels.  Groups are
//! written in ledger order, so document order matches stack order.

use std::fmt::{self, Write};

use pt_core::ViewportSize;

use crate::frame::{PrintView, RenderFrame, TITLE};
use crate::glyph::{PawGlyph, VIEW_BOX};

/// Render `frame` as a standalone SVG document.
pub fn to_svg(frame: &RenderFrame, viewport: ViewportSize) -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible.
    let _ = write_svg(&mut out, frame, viewport);
    out
}

/// Write `frame` as a standalone SVG document to `out`.
pub fn write_svg<W: Write>(out: &mut W, frame: &RenderFrame, viewport: ViewportSize) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = viewport.width,
        h = viewport.height,
    )?;
    for print in &frame.prints {
        write_print(out, print)?;
    }
    write_hud(out, frame, viewport)?;
    writeln!(out, "</svg>")
}

fn write_print<W: Write>(out: &mut W, print: &PrintView) -> fmt::Result {
    let glyph = PawGlyph::for_slot(print.paw);
    let half = VIEW_BOX / 2.0;
    let class = if print.fading { "paw-print fade-out" } else { "paw-print" };
    writeln!(
        out,
        r#"  <g id="{id}" class="{class}" data-paw="{paw}" data-z="{z}" data-delay-ms="{delay}" transform="translate({x:.2} {y:.2}) rotate({rot:.2}) scale({scale:.4}) translate(-{half} -{half})">"#,
        id = print.id,
        paw = print.paw,
        z = print.z_index,
        delay = print.stagger_delay_ms,
        x = print.x,
        y = print.y,
        rot = print.rotation,
        scale = print.size / VIEW_BOX,
    )?;
    let pad = glyph.pad;
    writeln!(
        out,
        r#"    <ellipse cx="{}" cy="{}" rx="{}" ry="{}"/>"#,
        pad.cx, pad.cy, pad.rx, pad.ry
    )?;
    for toe in &glyph.toes {
        writeln!(out, r#"    <circle cx="{}" cy="{}" r="{}"/>"#, toe.cx, toe.cy, toe.r)?;
    }
    writeln!(out, "  </g>")
}

fn write_hud<W: Write>(out: &mut W, frame: &RenderFrame, viewport: ViewportSize) -> fmt::Result {
    let cx = viewport.width / 2.0;
    writeln!(out, r#"  <g class="hud" text-anchor="middle">"#)?;
    writeln!(out, r#"    <text x="{cx}" y="40">{TITLE}</text>"#)?;
    for (i, line) in frame.hud_lines().iter().enumerate() {
        writeln!(out, r#"    <text x="{cx}" y="{}">{line}</text>"#, 64 + i * 18)?;
    }
    writeln!(out, "  </g>")
}
