//! Process-wide default [`ResponseProfile`].
//!
//! Call sites that do not pass a profile explicitly use the registry's
//! default. The default is [`MinimalProfile`] until the host calls
//! [`configure`] once at startup.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::registry::ProfileRegistry;
//! use outcome_rail::response::MinimalProfile;
//!
//! let registry = ProfileRegistry::new();
//! registry
//!     .configure(|settings| {
//!         settings.use_profile(MinimalProfile);
//!     })
//!     .unwrap();
//!
//! assert!(registry.is_configured());
//! assert!(registry.configure(|_| {}).is_err());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::macros::{log_info, log_warn};
use crate::response::{MinimalProfile, ResponseProfile};
use crate::types::ContractViolation;

/// Settings handed to the configuration callback.
pub struct ProfileSettings {
    /// Profile used when a call site does not name one.
    pub default_profile: Arc<dyn ResponseProfile>,
}

impl ProfileSettings {
    /// Replaces the default profile.
    pub fn use_profile<P>(&mut self, profile: P) -> &mut Self
    where
        P: ResponseProfile + 'static,
    {
        self.default_profile = Arc::new(profile);
        self
    }
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self { default_profile: Arc::new(MinimalProfile) }
    }
}

impl core::fmt::Debug for ProfileSettings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProfileSettings").finish_non_exhaustive()
    }
}

/// Holder of the default profile; configurable exactly once.
pub struct ProfileRegistry {
    current: RwLock<Arc<dyn ResponseProfile>>,
    configured: AtomicBool,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(ProfileSettings::default().default_profile),
            configured: AtomicBool::new(false),
        }
    }

    /// Runs `setup` against fresh settings and installs the result.
    ///
    /// # Errors
    ///
    /// [`ContractViolation::AlreadyConfigured`] on any call after the first
    /// successful one; the installed profile is left untouched and `setup` is
    /// not run. If `setup` panics, nothing is installed and the registry can
    /// be configured again.
    pub fn configure<F>(&self, setup: F) -> Result<(), ContractViolation>
    where
        F: FnOnce(&mut ProfileSettings),
    {
        if self.configured.swap(true, Ordering::AcqRel) {
            log_warn!("response profile registry is already configured");
            return Err(ContractViolation::AlreadyConfigured);
        }

        let claim = ConfigureClaim { configured: &self.configured, committed: false };
        let mut settings = ProfileSettings::default();
        setup(&mut settings);

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = settings.default_profile;
        claim.commit();
        log_info!("default response profile configured");
        Ok(())
    }

    /// The profile currently installed.
    pub fn default_profile(&self) -> Arc<dyn ResponseProfile> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    #[inline]
    pub fn is_configured(&self) -> bool {
        self.configured.load(Ordering::Acquire)
    }
}

/// Releases the configured flag unless the new profile was installed.
struct ConfigureClaim<'a> {
    configured: &'a AtomicBool,
    committed: bool,
}

impl ConfigureClaim<'_> {
    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for ConfigureClaim<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.configured.store(false, Ordering::Release);
        }
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ProfileRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProfileRegistry")
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<ProfileRegistry> = OnceLock::new();

/// The process-wide registry.
pub fn global() -> &'static ProfileRegistry {
    GLOBAL.get_or_init(ProfileRegistry::new)
}

/// Configures the process-wide registry. See [`ProfileRegistry::configure`].
pub fn configure<F>(setup: F) -> Result<(), ContractViolation>
where
    F: FnOnce(&mut ProfileSettings),
{
    global().configure(setup)
}

/// The process-wide default profile.
pub fn default_profile() -> Arc<dyn ResponseProfile> {
    global().default_profile()
}

/// Installs a [`ContextAwareProfile`](crate::response::ContextAwareProfile)
/// reading the request from [`RequestScope`](crate::async_ext::RequestScope).
///
/// # Errors
///
/// Same as [`configure`].
#[cfg(feature = "async")]
pub fn install_context_aware<S>(settings: S) -> Result<(), ContractViolation>
where
    S: crate::response::ServiceSettings + 'static,
{
    configure(|profile_settings| {
        profile_settings.use_profile(crate::response::ContextAwareProfile::new(
            crate::async_ext::TaskLocalRequests,
            settings,
        ));
    })
}
