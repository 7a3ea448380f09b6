use crate::countries::{CountriesView, UseCountriesOptions, use_countries};
use crate::memo::Memo;
use std::fmt;
use std::rc::Rc;

/// The host side of a render cycle: something that can be asked to render again.
pub trait RenderHost {
    fn request_render(&self);
}

impl<F: Fn()> RenderHost for F {
    fn request_render(&self) {
        self();
    }
}

/// Owns the inputs and the memo slot of one [`use_countries`] call site.
///
/// Changing the options to an unequal value asks the host to re-render; setting equal
/// options is a no-op. [`CountriesHook::render`] reads through the memo.
pub struct CountriesHook<H> {
    host: H,
    options: UseCountriesOptions,
    memo: Memo<UseCountriesOptions, CountriesView>,
}

impl<H> fmt::Debug for CountriesHook<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountriesHook")
            .field("options", &self.options)
            .field("memo", &self.memo)
            .finish_non_exhaustive()
    }
}

impl<H: RenderHost> CountriesHook<H> {
    #[must_use]
    pub fn new(host: H, options: UseCountriesOptions) -> Self {
        Self { host, options, memo: Memo::new() }
    }

    #[must_use]
    pub const fn options(&self) -> &UseCountriesOptions {
        &self.options
    }

    /// Replaces the options. Returns `true` and requests a render when they changed.
    pub fn set_options(&mut self, options: UseCountriesOptions) -> bool {
        if self.options == options {
            return false;
        }
        self.options = options;
        self.host.request_render();
        true
    }

    #[must_use]
    pub fn render(&self) -> Rc<CountriesView> {
        use_countries(&self.memo, &self.options)
    }

    /// Number of times the view has been computed.
    #[must_use]
    pub fn computations(&self) -> u64 {
        self.memo.version()
    }
}
