use super::{ByteStore, Config};
use configkit_codec::{encode_opt, Color, Decode, Encode, Point, Rect, Size};
use configkit_utils::{hex, parse_bool};
use tracing::{debug, warn};

/// Typed access to settings kept in a [ByteStore].
pub struct Settings<S: ByteStore> {
    store: S,
    cfg: Config,
}

impl<S: ByteStore> Settings<S> {
    pub fn init(store: S, cfg: Config) -> Self {
        Self { store, cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn key(&self, key: &str) -> String {
        if self.cfg.partition.is_empty() {
            return key.to_string();
        }
        format!("{}.{}", self.cfg.partition, key)
    }

    fn get_value<T: Decode>(&self, key: &str, default: T) -> T {
        let key = self.key(key);
        let Some(value) = self.store.get_bytes(&key) else {
            return default;
        };
        match T::decode(&value[..]) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(%key, value = %hex(&value), ?err, "corrupt entry: using default");
                default
            }
        }
    }

    fn put_value<T: Encode>(&mut self, key: &str, value: Option<&T>) {
        match encode_opt(value) {
            Some(encoded) => {
                let key = self.key(key);
                debug!(%key, value = %hex(&encoded), "storing entry");
                self.store.put_bytes(&key, &encoded);
            }
            None => self.remove(key),
        }
    }

    /// Removes `key`.
    pub fn remove(&mut self, key: &str) {
        let key = self.key(key);
        debug!(%key, "removing entry");
        self.store.remove(&key);
    }

    pub fn get_size(&self, key: &str, default: Size) -> Size {
        self.get_value(key, default)
    }

    /// Stores `value`, or removes `key` if `None`.
    pub fn put_size(&mut self, key: &str, value: Option<Size>) {
        self.put_value(key, value.as_ref());
    }

    pub fn get_point(&self, key: &str, default: Point) -> Point {
        self.get_value(key, default)
    }

    /// Stores `value`, or removes `key` if `None`.
    pub fn put_point(&mut self, key: &str, value: Option<Point>) {
        self.put_value(key, value.as_ref());
    }

    pub fn get_rect(&self, key: &str, default: Rect) -> Rect {
        self.get_value(key, default)
    }

    /// Stores `value`, or removes `key` if `None`.
    pub fn put_rect(&mut self, key: &str, value: Option<Rect>) {
        self.put_value(key, value.as_ref());
    }

    /// Reads a color stored as bytes.
    pub fn get_color(&self, key: &str, default: Color) -> Color {
        self.get_value(key, default)
    }

    /// Stores `value` as bytes, or removes `key` if `None`.
    pub fn put_color(&mut self, key: &str, value: Option<Color>) {
        self.put_value(key, value.as_ref());
    }

    /// Reads a color stored as hex text.
    pub fn get_color_hex(&self, key: &str, default: Color) -> Color {
        let value = self.store.get_string(&self.key(key));
        Color::from_hex_string(value.as_deref(), default)
    }

    /// Stores `value` as hex text, or removes `key` if `None`.
    pub fn put_color_hex(&mut self, key: &str, value: Option<Color>) {
        let Some(value) = value else {
            return self.remove(key);
        };
        let key = self.key(key);
        let value = value.to_hex_string();
        debug!(%key, %value, "storing entry");
        self.store.put_string(&key, &value);
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        let key = self.key(key);
        let value = self.store.get_string(&key);
        match parse_bool(value.as_deref()) {
            Some(parsed) => parsed,
            None => {
                if let Some(value) = value {
                    debug!(%key, %value, "not a bool: using default");
                }
                default
            }
        }
    }

    pub fn put_bool(&mut self, key: &str, value: bool) {
        let key = self.key(key);
        debug!(%key, value, "storing entry");
        self.store.put_string(&key, &value.to_string());
    }
}
