//! Cross-theme behavior of the built-in and custom cell styles.

use horizon_passcode_style::prelude::*;

const EMPTY: CellState = CellState::new(false, false, false);
const SELECTED: CellState = CellState::new(false, true, false);
const FILLED: CellState = CellState::new(true, false, false);
const ERROR: CellState = CellState::new(true, true, true);

/// A theme built only from `by_state` colors: one underline, never animated.
struct FlatStyle {
    line: Decoration,
}

impl FlatStyle {
    fn new() -> Self {
        Self {
            line: Decoration::new(CellColor::by_state(
                Color::GRAY,
                Color::BLACK,
                Color::BLUE,
                Color::RED,
            )),
        }
    }
}

impl CellStyle for FlatStyle {
    fn apply(&mut self, cell: &mut CellAppearance, state: CellState) {
        self.selection_changed(cell, state);
    }

    fn selection_changed(&mut self, cell: &mut CellAppearance, state: CellState) {
        self.line.paint(cell.layer_mut(LayerKind::Underline), state);
    }

    fn bounds_changed(&mut self, cell: &mut CellAppearance, bounds: Rect) {
        cell.bounds = bounds;
        cell.layer_mut(LayerKind::Underline).frame =
            Rect::new(0.0, bounds.height() - 1.0, bounds.width(), 1.0);
    }
}

fn boxed(factory: &CellStyleFactory) -> (Box<dyn CellStyle>, CellAppearance) {
    (factory(), CellAppearance::new())
}

#[test]
fn test_factories_produce_independent_styles() {
    let factory = style_factory(UnderlineStyle::default);
    let (mut first, mut a) = boxed(&factory);
    let (mut second, mut b) = boxed(&factory);

    first.apply(&mut a, SELECTED);
    second.apply(&mut b, FILLED);

    assert!(a.is_animating());
    assert!(!b.is_animating());
}

#[test]
fn test_error_wins_in_every_theme() {
    let palette = PasscodePalette::light();
    let styles: Vec<Box<dyn CellStyle>> = vec![
        Box::new(UnderlineStyle::from_palette(&palette)),
        Box::new(BoxedStyle::from_palette(&palette)),
    ];

    for mut style in styles {
        let mut cell = CellAppearance::new();
        style.apply(&mut cell, SELECTED);
        style.error_changed(&mut cell, ERROR);

        assert_eq!(cell.text_color, Some(palette.error));
        assert!(!cell.is_animating());
    }
}

#[test]
fn test_custom_theme_through_default_error_hook() {
    let mut style = FlatStyle::new();
    let mut cell = CellAppearance::new();
    let line_color = |cell: &CellAppearance| cell.layer(LayerKind::Underline).and_then(|l| l.color);

    style.apply(&mut cell, EMPTY);
    assert_eq!(line_color(&cell), Some(Color::GRAY));

    style.selection_changed(&mut cell, SELECTED);
    assert_eq!(line_color(&cell), Some(Color::BLUE));

    style.error_changed(&mut cell, ERROR);
    assert_eq!(line_color(&cell), Some(Color::RED));
}

#[test]
fn test_geometry_ignores_state() {
    let bounds = Rect::new(0.0, 0.0, 30.0, 40.0);
    let mut frames = Vec::new();

    for state in [EMPTY, SELECTED, FILLED, ERROR] {
        let mut style = BoxedStyle::default();
        let mut cell = CellAppearance::new();
        style.apply(&mut cell, state);
        style.bounds_changed(&mut cell, bounds);
        frames.push(cell.layers().iter().map(|l| (l.kind, l.frame)).collect::<Vec<_>>());
    }

    assert!(frames.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_cycle_sampling_matches_layer_colors() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut style = UnderlineStyle::from_palette(&PasscodePalette::dark());
    let mut cell = CellAppearance::new();
    style.apply(&mut cell, SELECTED);

    let cycle = cell
        .layer(LayerKind::Underline)
        .and_then(|l| l.animation.clone())
        .expect("selected underline animates");
    assert_eq!(cycle.sample(std::time::Duration::ZERO), cycle.colors()[0]);
}
