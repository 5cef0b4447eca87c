//! Property attributes stored alongside indexed elements

/// Property attributes
///
/// The `Default` value is [`PropertyAttributes::DEFAULT`] (all flags set),
/// which is what an ordinary `a[i] = v` assignment produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertyAttributes {
    /// Property is writable
    pub writable: bool,
    /// Property is enumerable
    pub enumerable: bool,
    /// Property is configurable
    pub configurable: bool,
}

impl PropertyAttributes {
    /// Writable, enumerable and configurable.
    ///
    /// Dense element storage can only hold elements with these attributes.
    pub const DEFAULT: Self = Self::data();

    /// Default data property attributes
    pub const fn data() -> Self {
        Self {
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Non-writable, non-enumerable, non-configurable
    pub const fn frozen() -> Self {
        Self {
            writable: false,
            enumerable: false,
            configurable: false,
        }
    }

    /// Writable and enumerable but not configurable (a sealed element)
    pub const fn sealed() -> Self {
        Self {
            writable: true,
            enumerable: true,
            configurable: false,
        }
    }

    /// Copy with the writable flag replaced
    pub const fn with_writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    /// Copy with the enumerable flag replaced
    pub const fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    /// Copy with the configurable flag replaced
    pub const fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }

    /// Check if writable
    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    /// Check if enumerable
    pub const fn is_enumerable(&self) -> bool {
        self.enumerable
    }

    /// Check if configurable
    pub const fn is_configurable(&self) -> bool {
        self.configurable
    }

    /// Whether these are the attributes a dense store can represent.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for PropertyAttributes {
    fn default() -> Self {
        Self::DEFAULT
    }
}
