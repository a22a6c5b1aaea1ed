//! Macros for reducing boilerplate in widget implementations.

/// Generates a builder-style setter method for a field.
///
/// # Usage
///
/// ```ignore
/// // When method name matches field name:
/// builder_field!(width, f32);
/// // Generates: pub fn width(mut self, value: f32) -> Self { self.width = value; self }
///
/// // When method name differs from field name:
/// builder_field!(min, min_value, i64);
/// ```
#[macro_export]
macro_rules! builder_field {
    ($name:ident, $type:ty) => {
        pub fn $name(mut self, value: $type) -> Self {
            self.$name = value;
            self
        }
    };
    ($method:ident, $field:ident, $type:ty) => {
        pub fn $method(mut self, value: $type) -> Self {
            self.$field = value;
            self
        }
    };
}

/// Generates a callback setter storing a [`Callback`](crate::Callback).
///
/// The enclosing impl must name its message type parameter `M`.
///
/// ```ignore
/// // For callbacks with no parameters:
/// callback_setter!(on_click);
/// // Generates: pub fn on_click<F>(mut self, f: F) -> Self where F: Fn() -> M + 'static
///
/// // For callbacks with a parameter:
/// callback_setter!(on_change, f32);
/// // Generates: pub fn on_change<F>(mut self, f: F) -> Self where F: Fn(f32) -> M + 'static
/// ```
#[macro_export]
macro_rules! callback_setter {
    ($name:ident) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn() -> M + 'static,
        {
            self.$name = $crate::Callback::new(move |()| f());
            self
        }
    };
    ($name:ident, $param:ty) => {
        pub fn $name<F>(mut self, f: F) -> Self
        where
            F: Fn($param) -> M + 'static,
        {
            self.$name = $crate::Callback::new(f);
            self
        }
    };
}

/// Wrap a list of widgets into a `Vec<Element<_>>`.
///
/// ```ignore
/// row(elements![button("Blue 1"), label("next to it")])
/// ```
#[macro_export]
macro_rules! elements {
    () => {
        ::std::vec::Vec::new()
    };
    ($($widget:expr),+ $(,)?) => {
        vec![$($crate::Element::new($widget)),+]
    };
}
