//! The OTP field component
//!
//! `OtpInput` is the unidirectional loop: a surface event becomes a `Msg`,
//! `update` computes the next model and a `Cmd`, and `process_cmd` carries
//! the command out. Effects never call back into `update`.

use std::fmt;

use crate::commands::Cmd;
use crate::config::OtpConfig;
use crate::messages::{FieldEvent, Msg};
use crate::model::{OtpModel, OtpState};
use crate::surface::Surface;
use crate::update::update;
use crate::view::{self, OtpView};

/// Host callback receiving the joined code after every change
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// What the surface should do with the native event it just delivered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the field's built-in handling (insertion, caret movement)
    pub prevent_default: bool,
}

/// A mounted OTP field bound to one surface
pub struct OtpInput<S: Surface> {
    model: OtpModel,
    surface: S,
    on_change: Option<ChangeCallback>,
}

impl<S: Surface> fmt::Debug for OtpInput<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtpInput")
            .field("model", &self.model)
            .field("has_callback", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: Surface> OtpInput<S> {
    /// Create the component and run the mount effects
    ///
    /// The surface gets its first render and focus lands on slot 0 (when
    /// there is one). The callback, if any, is notified once with `""`.
    pub fn mount(config: OtpConfig, surface: S, on_change: Option<ChangeCallback>) -> Self {
        let model = OtpModel::new(config);
        tracing::debug!(slots = model.len(), "mounting otp field");

        let mut input = Self {
            model,
            surface,
            on_change,
        };

        let mut mount_effects = vec![Cmd::Render];
        if !input.model.is_empty() {
            mount_effects.push(Cmd::Focus(input.model.state.active_index()));
        }
        mount_effects.push(Cmd::NotifyChange {
            code: input.model.code(),
        });

        let mut response = EventResponse::default();
        input.process_cmd(Cmd::batch(mount_effects), &mut response);
        input
    }

    /// Mount with a plain closure as the change callback
    pub fn mount_with_callback<F>(config: OtpConfig, surface: S, on_change: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        Self::mount(config, surface, Some(Box::new(on_change)))
    }

    /// Route one surface event through the update loop
    pub fn handle(&mut self, event: FieldEvent) -> EventResponse {
        self.dispatch(Msg::Field(event))
    }

    /// Run any message through the update loop and execute its effects
    pub fn dispatch(&mut self, msg: Msg) -> EventResponse {
        let mut response = EventResponse::default();
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd, &mut response);
        }
        response
    }

    fn process_cmd(&mut self, cmd: Cmd, response: &mut EventResponse) {
        match cmd {
            Cmd::None => {}
            Cmd::Render => {
                let view = view::render(&self.model);
                self.surface.render(&view);
            }
            Cmd::Focus(index) => {
                tracing::trace!(index, "focus effect");
                self.surface.focus(index);
            }
            Cmd::NotifyChange { code } => {
                tracing::trace!(code = %code, "change effect");
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(&code);
                }
            }
            Cmd::PreventDefault => {
                response.prevent_default = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, response);
                }
            }
        }
    }

    /// The joined code
    pub fn code(&self) -> String {
        self.model.code()
    }

    pub fn state(&self) -> &OtpState {
        &self.model.state
    }

    pub fn config(&self) -> &OtpConfig {
        &self.model.config
    }

    /// The view as it would be rendered now
    pub fn view(&self) -> OtpView {
        view::render(&self.model)
    }

    /// True when every slot is filled
    pub fn is_complete(&self) -> bool {
        self.model.state.is_complete()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tear down, handing the surface back
    pub fn unmount(self) -> S {
        tracing::debug!(slots = self.model.len(), "unmounting otp field");
        self.surface
    }
}
