//! Integration tests for PlaybackController driven through host events

use vidctl::host::{EventType, HostDocument, MediaElement, MemoryDocument};
use vidctl::{
    format_time, ConfigError, ControlAction, Icon, PlaybackController, PlayerError, PlayerOptions,
};

use super::helpers::{
    capture_logs, click, icon, input, load_metadata, media, media_mut, mounted, mounted_default,
    tick, video,
};

// ============================================================================
// Mounting
// ============================================================================

#[test]
fn unknown_mount_logs_error_and_leaves_document_untouched() {
    let mut doc = MemoryDocument::new();
    doc.create_mount("player");
    let before = doc.outer_html(doc.root());
    let config = PlayerOptions::new("ghost", "movie.mp4").resolve().unwrap();

    let (controller, logs) = capture_logs(|| PlaybackController::mount(&mut doc, config));

    assert!(!controller.is_mounted());
    assert!(controller.surface().is_none());
    assert_eq!(doc.outer_html(doc.root()), before);
    assert!(logs.contains("ERROR"), "logs: {}", logs);
    assert!(logs.contains("Parent element not found"), "logs: {}", logs);
    assert!(logs.contains("ghost"), "logs: {}", logs);
}

#[test]
fn inert_controller_ignores_everything() {
    let mut doc = MemoryDocument::new();
    let mount = doc.create_mount("player");
    let config = PlayerOptions::new("ghost", "movie.mp4").resolve().unwrap();
    let controller = PlaybackController::mount(&mut doc, config);
    let before = doc.outer_html(doc.root());

    assert_eq!(controller.handle_event(&mut doc, mount, EventType::Click), None);
    for action in [
        ControlAction::MetadataLoaded,
        ControlAction::TimeUpdate,
        ControlAction::Seek,
        ControlAction::TogglePlay,
        ControlAction::SkipForward,
        ControlAction::SkipBackward,
        ControlAction::ToggleMute,
        ControlAction::UpdateVolume,
        ControlAction::ToggleFullscreen,
        ControlAction::ToggleSettings,
        ControlAction::ChangeSpeed(2.0),
    ] {
        controller.perform(&mut doc, action);
    }

    assert_eq!(doc.outer_html(doc.root()), before);
    assert_eq!(doc.fullscreen_element(), None);
}

#[test]
fn try_mount_reports_missing_mount() {
    let mut doc = MemoryDocument::new();
    let config = PlayerOptions::new("ghost", "movie.mp4").resolve().unwrap();

    let err = PlaybackController::try_mount(&mut doc, config).unwrap_err();

    assert!(matches!(err, PlayerError::MountNotFound { ref id } if id == "ghost"));
    assert_eq!(err.to_string(), "Parent element not found: #ghost");
}

#[test]
fn from_options_reports_invalid_options() {
    let mut doc = MemoryDocument::new();
    doc.create_mount("player");

    let err = PlaybackController::from_options(&mut doc, PlayerOptions::new("player", ""))
        .unwrap_err();

    assert!(matches!(
        err,
        PlayerError::Config(ConfigError::MissingField { field: "src" })
    ));
}

#[test]
fn mount_injects_styles_into_head() {
    let (doc, controller) = mounted_default();

    assert!(controller.is_mounted());
    assert!(doc.element_by_id("vidctl-icon-font").is_some());
    assert!(doc.element_by_id("vidctl-style-player").is_some());
}

// ============================================================================
// Metadata and time updates
// ============================================================================

#[test]
fn seek_bar_disabled_until_metadata_loaded() {
    let (mut doc, controller) = mounted_default();
    let seek_bar = controller.surface().unwrap().seek_bar();

    // Time updates and seeks before metadata do not enable it
    controller.handle_event(&mut doc, video(&controller), EventType::TimeUpdate);
    input(&mut doc, &controller, seek_bar, "500");
    assert!(doc.has_attribute(seek_bar, "disabled"));
    assert_eq!(media(&doc, &controller).current_time(), 0.0);
    let current_label = controller.surface().unwrap().current_time_label();
    assert_eq!(doc.text_content(current_label), "00:00");

    load_metadata(&mut doc, &controller, 90.6);
    assert_eq!(media(&doc, &controller).current_time(), 0.0);

    assert!(!doc.has_attribute(seek_bar, "disabled"));
    assert_eq!(doc.attribute(seek_bar, "max").as_deref(), Some("90"));
    let duration_label = controller.surface().unwrap().duration_label();
    assert_eq!(doc.text_content(duration_label), "01:30");
}

#[test]
fn infinite_duration_keeps_seek_bar_disabled() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();

    load_metadata(&mut doc, &controller, f64::INFINITY);

    assert!(doc.has_attribute(surface.seek_bar(), "disabled"));
    assert_eq!(doc.text_content(surface.duration_label()), "00:00");
}

#[test]
fn time_update_mirrors_position() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();
    load_metadata(&mut doc, &controller, 300.0);
    click(&mut doc, &controller, surface.play_button());

    tick(&mut doc, &controller, 72.8);

    assert_eq!(doc.text_content(surface.current_time_label()), "01:12");
    assert_eq!(
        doc.attribute(surface.seek_bar(), "value").as_deref(),
        Some("72")
    );
}

#[test]
fn playback_runs_to_the_end() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();
    load_metadata(&mut doc, &controller, 20.0);
    click(&mut doc, &controller, surface.play_button());

    for _ in 0..30 {
        tick(&mut doc, &controller, 1.0);
    }

    assert!(media(&doc, &controller).paused());
    assert_eq!(doc.text_content(surface.current_time_label()), "00:20");
    assert_eq!(
        doc.attribute(surface.seek_bar(), "value").as_deref(),
        Some("20")
    );
}

// ============================================================================
// Seeking
// ============================================================================

#[test]
fn seek_input_moves_media_and_updates_label_immediately() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();
    load_metadata(&mut doc, &controller, 120.0);

    input(&mut doc, &controller, surface.seek_bar(), "42");

    assert_eq!(media(&doc, &controller).current_time(), 42.0);
    assert_eq!(doc.text_content(surface.current_time_label()), "00:42");
}

#[test]
fn seek_input_with_garbage_value_is_ignored() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();
    load_metadata(&mut doc, &controller, 120.0);
    input(&mut doc, &controller, surface.seek_bar(), "30");

    input(&mut doc, &controller, surface.seek_bar(), "");

    assert_eq!(media(&doc, &controller).current_time(), 30.0);
    assert_eq!(doc.text_content(surface.current_time_label()), "00:30");
}

#[test]
fn seek_and_time_update_agree_in_either_order() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();
    load_metadata(&mut doc, &controller, 120.0);

    input(&mut doc, &controller, surface.seek_bar(), "50");
    controller.handle_event(&mut doc, video(&controller), EventType::TimeUpdate);
    let seek_first = doc.text_content(surface.current_time_label());

    controller.handle_event(&mut doc, video(&controller), EventType::TimeUpdate);
    input(&mut doc, &controller, surface.seek_bar(), "50");
    let update_first = doc.text_content(surface.current_time_label());

    assert_eq!(seek_first, "00:50");
    assert_eq!(update_first, "00:50");
}

// ============================================================================
// Play / pause
// ============================================================================

#[test]
fn toggle_play_swaps_state_and_icon() {
    let (mut doc, controller) = mounted_default();
    let play_btn = controller.surface().unwrap().play_button();

    click(&mut doc, &controller, play_btn);
    assert!(!media(&doc, &controller).paused());
    assert_eq!(icon(&doc, play_btn), Some(Icon::Pause));

    click(&mut doc, &controller, play_btn);
    assert!(media(&doc, &controller).paused());
    assert_eq!(icon(&doc, play_btn), Some(Icon::Play));
}

#[test]
fn clicking_the_video_toggles_play() {
    let (mut doc, controller) = mounted_default();

    let action = controller.handle_event(&mut doc, video(&controller), EventType::Click);

    assert_eq!(action, Some(ControlAction::TogglePlay));
    assert!(!media(&doc, &controller).paused());
}

#[test]
fn toggle_play_is_a_no_op_in_fullscreen() {
    let (mut doc, controller) = mounted_default();
    let play_btn = controller.surface().unwrap().play_button();
    controller.handle_event(&mut doc, video(&controller), EventType::DoubleClick);
    assert_eq!(doc.fullscreen_element(), Some(video(&controller)));

    click(&mut doc, &controller, play_btn);
    controller.handle_event(&mut doc, video(&controller), EventType::Click);

    assert!(media(&doc, &controller).paused());
    assert_eq!(icon(&doc, play_btn), Some(Icon::Play));
}

// ============================================================================
// Skipping
// ============================================================================

#[test]
fn skip_forward_clamps_to_duration() {
    let (mut doc, controller) = mounted_default();
    let forward = controller.surface().unwrap().forward_button();
    load_metadata(&mut doc, &controller, 25.0);

    click(&mut doc, &controller, forward);
    assert_eq!(media(&doc, &controller).current_time(), 10.0);

    click(&mut doc, &controller, forward);
    click(&mut doc, &controller, forward);
    assert_eq!(media(&doc, &controller).current_time(), 25.0);
}

#[test]
fn skip_backward_clamps_to_zero() {
    let (mut doc, controller) = mounted_default();
    let backward = controller.surface().unwrap().backward_button();
    load_metadata(&mut doc, &controller, 60.0);
    media_mut(&mut doc, &controller).set_current_time(4.0);

    click(&mut doc, &controller, backward);

    assert_eq!(media(&doc, &controller).current_time(), 0.0);
}

#[test]
fn skip_uses_configured_step() {
    let (mut doc, controller) =
        mounted(PlayerOptions::new("player", "movie.mp4").with_skip_amount(2.5));
    let surface = controller.surface().unwrap().clone();
    load_metadata(&mut doc, &controller, 60.0);
    media_mut(&mut doc, &controller).set_current_time(30.0);

    click(&mut doc, &controller, surface.forward_button());
    assert_eq!(media(&doc, &controller).current_time(), 32.5);

    click(&mut doc, &controller, surface.backward_button());
    click(&mut doc, &controller, surface.backward_button());
    assert_eq!(media(&doc, &controller).current_time(), 27.5);
}

#[test]
fn skip_never_leaves_bounds() {
    let (mut doc, controller) = mounted_default();
    load_metadata(&mut doc, &controller, 37.0);

    for seconds in [-100.0, 15.0, 50.0, -3.0, 1000.0, -0.5, 8.0] {
        controller.skip(&mut doc, seconds);
        let position = media(&doc, &controller).current_time();
        assert!((0.0..=37.0).contains(&position), "position {}", position);
    }
}

// ============================================================================
// Volume and mute
// ============================================================================

#[test]
fn volume_slider_sets_media_volume() {
    let (mut doc, controller) = mounted_default();
    let slider = controller.surface().unwrap().volume_slider();

    input(&mut doc, &controller, slider, "0.35");

    assert_eq!(media(&doc, &controller).volume(), 0.35);
}

#[test]
fn volume_slider_ignores_unusable_values() {
    let (mut doc, controller) = mounted_default();
    let slider = controller.surface().unwrap().volume_slider();
    input(&mut doc, &controller, slider, "0.5");

    input(&mut doc, &controller, slider, "loud");
    assert_eq!(media(&doc, &controller).volume(), 0.5);

    input(&mut doc, &controller, slider, "7");
    assert_eq!(media(&doc, &controller).volume(), 1.0);
}

#[test]
fn mute_then_unmute_restores_volume() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();
    input(&mut doc, &controller, surface.volume_slider(), "0.35");

    click(&mut doc, &controller, surface.mute_button());
    assert!(media(&doc, &controller).muted());
    assert_eq!(
        doc.attribute(surface.volume_slider(), "value").as_deref(),
        Some("0")
    );
    assert_eq!(icon(&doc, surface.mute_button()), Some(Icon::VolumeMute));

    click(&mut doc, &controller, surface.mute_button());
    assert!(!media(&doc, &controller).muted());
    assert_eq!(
        doc.attribute(surface.volume_slider(), "value").as_deref(),
        Some("0.35")
    );
    assert_eq!(media(&doc, &controller).volume(), 0.35);
    assert_eq!(icon(&doc, surface.mute_button()), Some(Icon::VolumeUp));
}

// ============================================================================
// Fullscreen, speed, settings
// ============================================================================

#[test]
fn fullscreen_button_enters_and_exits() {
    let (mut doc, controller) = mounted_default();
    let button = controller.surface().unwrap().fullscreen_button();

    click(&mut doc, &controller, button);
    assert_eq!(doc.fullscreen_element(), Some(video(&controller)));

    click(&mut doc, &controller, button);
    assert_eq!(doc.fullscreen_element(), None);
}

#[test]
fn rejected_fullscreen_is_logged() {
    let (mut doc, controller) = mounted_default();
    doc.set_fullscreen_enabled(false);
    let button = controller.surface().unwrap().fullscreen_button();

    let (_, logs) = capture_logs(|| click(&mut doc, &controller, button));

    assert_eq!(doc.fullscreen_element(), None);
    assert!(logs.contains("Fullscreen request rejected"), "logs: {}", logs);
}

#[test]
fn speed_options_set_playback_rate() {
    let (mut doc, controller) = mounted_default();
    let options = controller.surface().unwrap().speed_options().to_vec();

    click(&mut doc, &controller, options[1].node);
    assert_eq!(media(&doc, &controller).playback_rate(), 2.0);

    click(&mut doc, &controller, options[2].node);
    assert_eq!(media(&doc, &controller).playback_rate(), 3.0);

    click(&mut doc, &controller, options[0].node);
    assert_eq!(media(&doc, &controller).playback_rate(), 1.0);
}

#[test]
fn settings_button_toggles_menu_visibility() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();

    click(&mut doc, &controller, surface.settings_button());
    assert!(doc.has_class(surface.settings_menu(), "show-settings"));

    click(&mut doc, &controller, surface.settings_button());
    assert!(!doc.has_class(surface.settings_menu(), "show-settings"));
    assert!(doc.has_class(surface.settings_menu(), "settings-options"));
}

#[test]
fn unbound_events_are_ignored() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();

    assert_eq!(
        controller.handle_event(&mut doc, surface.play_button(), EventType::Input),
        None
    );
    assert_eq!(
        controller.handle_event(&mut doc, surface.duration_label(), EventType::Click),
        None
    );
}

#[test]
fn time_labels_use_public_formatter() {
    let (mut doc, controller) = mounted_default();
    let surface = controller.surface().unwrap().clone();
    load_metadata(&mut doc, &controller, 3725.0);

    assert_eq!(
        doc.text_content(surface.duration_label()),
        format_time(3725.0)
    );
    assert_eq!(doc.text_content(surface.duration_label()), "62:05");
}
