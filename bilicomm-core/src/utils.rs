macro_rules! setter_copy {
    ($(#[$meta:meta])* $name: ident, $tyty: ty) => {
        $(#[$meta])*
        #[must_use]
        pub const fn $name(mut self, $name: $tyty) -> Self {
            self.$name = $name;
            self
        }
    };
}

macro_rules! setter_option_into {
    ($(#[$meta:meta])* $name: ident, $tyty: ty) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(mut self, $name: impl Into<$tyty>) -> Self {
            self.$name = Some($name.into());
            self
        }
    };
}
