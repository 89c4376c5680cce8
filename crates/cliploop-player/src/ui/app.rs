//! Main iced application for the cliploop player
//!
//! Owns the repeat session, the media transport, and the frame-loop
//! handles; dispatches messages to the handler modules and rebuilds the
//! widget snapshots after every update.

use cliploop_core::autopan::AutoPan;
use cliploop_core::drag::DragMode;
use cliploop_core::media::MediaTransport;
use cliploop_core::session::RepeatSession;
use cliploop_core::types::format_timestamp;
use cliploop_widgets::{repeat_bar, seek_bar, RepeatBarState, SeekBarState};
use iced::widget::{button, column, container, row, text, Space};
use iced::{keyboard, time, Center, Element, Fill, Subscription, Task, Theme};

use crate::config::PlayerConfig;
use crate::media::ClockTransport;
use crate::ui::handlers;
use crate::ui::loops::{FrameLoops, FRAME_INTERVAL};
use crate::ui::message::Message;

/// Application state
pub struct PlayerApp {
    pub(crate) config: PlayerConfig,
    /// The media collaborator
    pub(crate) transport: ClockTransport,
    /// Repeat-mode session (options + active range/viewport)
    pub(crate) repeat: RepeatSession,
    /// Auto-pan engine, engaged while a drag overshoots the viewport
    pub(crate) auto_pan: AutoPan,
    /// Frame-loop handles gating the tick subscription
    pub(crate) loops: FrameLoops,
    /// Mode of the in-progress repeat drag, if any
    pub(crate) drag: Option<DragMode>,
    /// Whether playback resumes when the seek-bar scrub ends
    pub(crate) resume_after_scrub: bool,
    /// Status line (play failures, refused repeat creation)
    pub(crate) status: String,
    /// Widget snapshots rebuilt after every update
    pub(crate) seek_bar: SeekBarState,
    pub(crate) repeat_bar: Option<RepeatBarState>,
}

impl PlayerApp {
    pub fn new(config: PlayerConfig) -> Self {
        let transport = ClockTransport::new(config.media.duration_secs);
        let repeat = RepeatSession::new(config.repeat);
        let mut app = Self {
            config,
            transport,
            repeat,
            auto_pan: AutoPan::default(),
            loops: FrameLoops::default(),
            drag: None,
            resume_after_scrub: false,
            status: String::new(),
            seek_bar: SeekBarState {
                fraction: 0.0,
                enabled: false,
            },
            repeat_bar: None,
        };
        app.sync_bars();
        app
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Tick => handlers::tick::handle(self),
            Message::TogglePlay => handlers::transport::toggle_play(self),
            Message::Stop => handlers::transport::stop(self),
            Message::ToggleMute => handlers::transport::toggle_mute(self),
            Message::Skip(delta) => handlers::transport::skip(self, delta),
            Message::Scrub(event) => handlers::transport::scrub(self, event),
            Message::KeyPressed(key) => handlers::transport::key_pressed(self, key),
            Message::ToggleRepeat => handlers::repeat::toggle(self),
            Message::Range(event) => handlers::repeat::range_event(self, event),
        };
        self.sync_bars();
        task
    }

    /// Rebuild the widget snapshots from the transport and repeat session
    fn sync_bars(&mut self) {
        let duration = self.transport.duration();
        let current = self.transport.current_time();

        self.seek_bar = SeekBarState {
            fraction: match duration {
                Some(d) if d > 0.0 => current / d,
                _ => 0.0,
            },
            enabled: duration.is_some(),
        };

        self.repeat_bar = self.repeat.active().map(|active| RepeatBarState {
            range: active.range,
            viewport: active.viewport,
            options: self.repeat.options(),
            media_duration: duration.unwrap_or(0.0),
            playhead: current,
        });
    }

    /// Subscribe to key presses, and to frame ticks whenever anything is
    /// animating: playback (progress + clamp) or an auto-panning drag.
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs =
            vec![iced::event::listen_with(|event, status, _window| match (
                event, status,
            ) {
                (
                    iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                    iced::event::Status::Ignored,
                ) => Some(Message::KeyPressed(key)),
                _ => None,
            })];

        let ticking = !self.transport.paused()
            || self.loops.auto_pan.is_engaged()
            || self.loops.clamp.is_engaged();
        if ticking {
            subs.push(time::every(FRAME_INTERVAL).map(|_| Message::Tick));
        }

        Subscription::batch(subs)
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = text(&self.config.media.title).size(20);

        let duration_label = match self.transport.duration() {
            Some(duration) => format_timestamp(duration),
            None => "--:--.--".to_string(),
        };
        let clock = text(format!(
            "{} / {}",
            format_timestamp(self.transport.current_time()),
            duration_label
        ))
        .size(14);

        let play_label = if self.transport.paused() { "Play" } else { "Pause" };
        let mute_label = if self.transport.muted() { "Unmute" } else { "Mute" };
        let repeat_label = if self.repeat.is_active() {
            "Repeat off"
        } else {
            "Repeat on"
        };
        let skip = self.config.transport.skip_seconds;

        let controls = row![
            button(text(play_label)).on_press(Message::TogglePlay),
            button(text("Stop")).on_press(Message::Stop),
            button(text(format!("-{:.0} s", skip))).on_press(Message::Skip(-skip)),
            button(text(format!("+{:.0} s", skip))).on_press(Message::Skip(skip)),
            button(text(mute_label)).on_press(Message::ToggleMute),
            button(text(repeat_label)).on_press(Message::ToggleRepeat),
        ]
        .spacing(8)
        .align_y(Center);

        let seek = seek_bar(&self.seek_bar, Message::Scrub);

        let mut content = column![header, clock, controls, seek].spacing(10);

        if let Some(bar_state) = &self.repeat_bar {
            let labels = row![
                text(format!("A {}", format_timestamp(bar_state.range.start()))).size(12),
                Space::new().width(Fill),
                text(format!("B {}", format_timestamp(bar_state.range.end()))).size(12),
            ];
            content = content
                .push(repeat_bar(bar_state, Message::Range))
                .push(labels);
        }

        let status_bar = container(text(&self.status).size(12)).padding(5);

        container(column![content, Space::new().height(Fill), status_bar].padding(10))
            .width(Fill)
            .height(Fill)
            .into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
