/// How a deep link to a detail screen changes the back stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeepLinkPolicy {
    /// Replace the stack with `[start destination, detail]`, so going back from the detail
    /// screen lands on the start destination.
    #[default]
    SynthesizeParent,

    /// Push the detail entry onto the existing stack.
    Push,
}

/// Global configuration options for the [`Navigator`](crate::prelude::Navigator).
///
/// This implements [`Default`] and follows the builder pattern, so you can use it like this:
/// ```rust
/// # use rally_router::prelude::*;
/// let cfg = NavigatorConfig::default().deep_link_policy(DeepLinkPolicy::Push);
/// let navigator = Navigator::with_config(cfg);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigatorConfig {
    pub(crate) deep_link_policy: DeepLinkPolicy,
}

impl NavigatorConfig {
    /// How deep links to detail screens are applied.
    ///
    /// Defaults to [`DeepLinkPolicy::SynthesizeParent`].
    pub fn deep_link_policy(self, policy: DeepLinkPolicy) -> Self {
        Self {
            deep_link_policy: policy,
        }
    }

    /// The configured deep link policy.
    pub fn current_deep_link_policy(&self) -> DeepLinkPolicy {
        self.deep_link_policy
    }
}
