use super::host::*;
use super::variant::*;

use crate::cache::*;
use crate::definition::*;

///
/// Callback a binding uses to push paint effects back to its host
///
/// Registered by the toolkit glue at attach time; invoked synchronously on
/// the thread the notification arrived on.
///
pub type PaintCallback = Box<dyn FnMut(HostId, HostPaint) + Send>;

///
/// Binds a gradient definition to a single host element
///
/// The binding keeps the definition's size and effective palette synchronized
/// with the host and pushes a rasterized paint through the registered
/// callback whenever recomputation completes. A definition is bound to at
/// most one host at a time: attaching tears down any previous attachment and
/// rederives the size from the new host.
///
/// Recomputations that find the definition not ready (a zero size during
/// setup, no colours yet) leave the host's paint untouched.
///
pub struct GradientBinding {
    definition: GradientDefinition,
    variant:    BindingVariant,
    cache:      GradientCache,
    state:      BindingState,
}

enum BindingState {
    Unattached,

    Attached {
        host:       HostId,
        metrics:    HostMetrics,
        on_paint:   PaintCallback,
    },
}

impl GradientBinding {
    ///
    /// Creates a binding using the process-wide default cache
    ///
    pub fn new(definition: GradientDefinition, variant: BindingVariant) -> GradientBinding {
        Self::with_cache(definition, variant, default_gradient_cache().clone())
    }

    ///
    /// Creates a binding using an injected cache instance
    ///
    pub fn with_cache(definition: GradientDefinition, variant: BindingVariant, cache: GradientCache) -> GradientBinding {
        GradientBinding {
            definition: definition,
            variant:    variant,
            cache:      cache,
            state:      BindingState::Unattached,
        }
    }

    pub fn definition(&self) -> &GradientDefinition {
        &self.definition
    }

    pub fn is_attached(&self) -> bool {
        match self.state {
            BindingState::Attached { .. }   => true,
            BindingState::Unattached        => false,
        }
    }

    ///
    /// The host this binding is attached to
    ///
    pub fn host(&self) -> Option<HostId> {
        match &self.state {
            BindingState::Attached { host, .. } => Some(*host),
            BindingState::Unattached            => None,
        }
    }

    ///
    /// Attaches this binding to a host element
    ///
    /// Any previous attachment is torn down first. The definition's size is
    /// derived from the new host's metrics and an initial paint is pushed if
    /// the definition is ready.
    ///
    pub fn attach(&mut self, host: HostId, metrics: HostMetrics, on_paint: PaintCallback) {
        if self.is_attached() {
            log::debug!("gradient binding reattached to host {:?}", host);
            self.detach();
        }

        self.state = BindingState::Attached { host, metrics, on_paint };

        self.remeasure();
        self.recompute();
    }

    ///
    /// Tears down the attachment; the binding stops reacting to notifications
    /// until it is attached again
    ///
    pub fn detach(&mut self) {
        self.state = BindingState::Unattached;
    }

    ///
    /// Processes a change notification from the host
    ///
    /// The tracked metrics are updated, the definition's size is rederived
    /// and a recomputation runs exactly once per notification.
    ///
    pub fn notify(&mut self, event: HostEvent) {
        let metrics = match &mut self.state {
            BindingState::Attached { metrics, .. }  => metrics,
            BindingState::Unattached                => {
                log::warn!("gradient binding notified while unattached: {:?}", event);
                return;
            }
        };

        match event {
            HostEvent::Resized(frame)               => { metrics.frame = frame; }
            HostEvent::ContentChanged(text, font)   => { metrics.text = Some((text, font)); }
            HostEvent::ProgressChanged(progress)    => { metrics.progress = progress; }
            HostEvent::OutlineWidthChanged(width)   => { metrics.outline_width = width; }
            HostEvent::DimStateChanged(is_dimmed)   => { metrics.is_dimmed = is_dimmed; }
        }

        self.remeasure();
        self.recompute();
    }

    ///
    /// Mutates the definition, recomputing only if the mutation produced an
    /// externally visible change
    ///
    pub fn update_definition<TFn>(&mut self, update: TFn)
    where
        TFn: FnOnce(&mut GradientDefinition),
    {
        let before = self.definition.revision();
        update(&mut self.definition);

        if self.definition.revision() != before {
            self.recompute();
        }
    }

    ///
    /// Rederives the definition's size from the host metrics via the variant
    ///
    fn remeasure(&mut self) {
        let new_size = match &self.state {
            BindingState::Attached { metrics, .. }  => self.variant.measure(metrics),
            BindingState::Unattached                => { return; }
        };

        if new_size != self.definition.size() {
            self.definition.set_size(new_size);
        }
    }

    ///
    /// Recomputes the gradient and pushes the paint to the host
    ///
    fn recompute(&mut self) {
        let (host, metrics) = match &self.state {
            BindingState::Attached { host, metrics, .. }    => (*host, metrics.clone()),
            BindingState::Unattached                        => { return; }
        };

        let effective_colors    = self.definition.effective_colors(metrics.is_dimmed);

        let result              = match self.variant.border_paint(&metrics) {
            Some(border)    => self.cache.get_or_render_border(&self.definition, &border, &effective_colors),
            None            => self.cache.get_or_render(&self.definition, &effective_colors),
        };

        match result {
            Some(result) => {
                let paint = self.variant.paint(result);

                if let BindingState::Attached { on_paint, .. } = &mut self.state {
                    on_paint(host, paint);
                }
            }

            None => {
                log::debug!("gradient for host {:?} not ready at size {:?}", host, self.definition.size());
            }
        }
    }
}
