//! Saving and restoring window state through a store.

use configkit_codec::{Color, Point, Rect, Size};
use configkit_settings::{ByteStore, Config, MemoryStore, Settings};
use configkit_utils::layout::{
    set_component_bounds_opt, set_component_size_opt, ComponentSizer,
};
use tracing::Level;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::DEBUG)
        .try_init();
}

struct Window {
    minimum: Size,
    bounds: Rect,
}

impl ComponentSizer for Window {
    fn minimum_size(&self) -> Size {
        self.minimum
    }

    fn is_window(&self) -> bool {
        true
    }

    fn set_size(&mut self, size: Size) {
        self.bounds.width = size.width;
        self.bounds.height = size.height;
    }

    fn set_preferred_size(&mut self, _: Size) {
        unreachable!("windows are sized directly");
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

fn config() -> Config {
    Config {
        partition: "editor".to_string(),
    }
}

#[test]
fn test_restore_after_reopen() {
    init_tracing();

    // First session saves its state
    let mut settings = Settings::init(MemoryStore::default(), config());
    settings.put_rect("window.bounds", Some(Rect::new(40, 30, 1024, 768)));
    settings.put_point("splitter", Some(Point::new(300, 0)));
    settings.put_color("highlight", Some(Color::argb(0x80FFFF00)));
    settings.put_bool("window.maximized", true);
    let store = settings.into_inner();
    assert_eq!(store.len(), 4);

    // Second session restores it
    let settings = Settings::init(store, config());
    let mut window = Window {
        minimum: Size::new(200, 100),
        bounds: Rect::default(),
    };
    let bounds = settings.get_rect("window.bounds", Rect::from_size(640, 480));
    set_component_bounds_opt(&mut window, Some(bounds));
    assert_eq!(window.bounds, Rect::new(40, 30, 1024, 768));
    assert_eq!(
        settings.get_point("splitter", Point::default()),
        Point::new(300, 0)
    );
    assert_eq!(
        settings.get_color("highlight", Color::default()),
        Color::argb(0x80FFFF00)
    );
    assert!(settings.get_bool("window.maximized", false));
}

#[test]
fn test_restore_respects_minimum() {
    init_tracing();

    let mut settings = Settings::init(MemoryStore::default(), config());
    settings.put_size("window.size", Some(Size::new(50, 500)));

    let mut window = Window {
        minimum: Size::new(200, 100),
        bounds: Rect::default(),
    };
    let size = settings.get_size("window.size", Size::new(640, 480));
    set_component_size_opt(&mut window, Some(size));
    assert_eq!(window.bounds.size(), Size::new(200, 500));
}

#[test]
fn test_restore_from_corrupt_store() {
    init_tracing();

    let mut store = MemoryStore::default();
    store.put_bytes("editor.window.bounds", &[0x45, 0x30, 0x00, 0x00, 0x00]);
    store.put_string("editor.highlight", "not a color");
    let settings = Settings::init(store, config());

    let fallback = Rect::from_size(640, 480);
    assert_eq!(settings.get_rect("window.bounds", fallback), fallback);
    let fallback = Color::rgb(0xFFFF00);
    assert_eq!(settings.get_color_hex("highlight", fallback), fallback);
}
