// Closed code lists carried on the wire as their upper-case names.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    _ => Err($crate::error::UnknownCode {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}
