use crate::player::fullscreen::use_fullscreen;
use crate::player::keyboard::use_keyboard_controls;
use crate::player::media::{toggle_play, use_media_event};
use crate::player::progress::{progress_percent, seek_fraction, seek_time};
use crate::player::speed::{format_rate, is_selected, next_rate, SPEED_OPTIONS};
use crate::player::state::{MediaEvent, PlaybackMachine, PlaybackState};
use crate::player::volume::{VolumeLevel, VolumeState};
use crate::utils::format_time;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlVideoElement, MouseEvent};
use yew::prelude::*;

const FEEDBACK_FLASH_MS: u32 = 500;
const CONTROLS_HIDE_DELAY_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub src: AttrValue,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let video_ref = use_node_ref();
    let container_ref = use_node_ref();
    let machine = use_reducer(PlaybackMachine::default);

    let on = |event: MediaEvent| {
        let dispatcher = machine.dispatcher();
        move |video: &HtmlVideoElement| {
            if let Some(event) = event.observed(video.paused()) {
                dispatcher.dispatch(event);
            }
        }
    };
    use_media_event(&video_ref, MediaEvent::CanPlay.event_name(), on(MediaEvent::CanPlay));
    use_media_event(&video_ref, MediaEvent::Playing.event_name(), on(MediaEvent::Playing));
    use_media_event(&video_ref, MediaEvent::Pause.event_name(), on(MediaEvent::Pause));
    use_media_event(&video_ref, MediaEvent::Waiting.event_name(), on(MediaEvent::Waiting));
    use_media_event(&video_ref, MediaEvent::TimeUpdate.event_name(), on(MediaEvent::TimeUpdate));

    let on_toggle_play = use_callback(video_ref.clone(), |_: (), video_ref| {
        if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
            toggle_play(&video);
        }
    });

    use_keyboard_controls(on_toggle_play.clone(), true);

    html! {
        <div ref={container_ref.clone()} class="relative aspect-video w-full overflow-hidden rounded-lg bg-black">
            <video
                ref={video_ref.clone()}
                src={props.src.clone()}
                playsinline={true}
                preload="metadata"
                autoplay={true}
                class="absolute inset-0 h-full w-full"
            />
            <PlayerOverlay
                state={machine.state}
                on_toggle_play={on_toggle_play}
                video_ref={video_ref}
                container_ref={container_ref}
            />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Feedback {
    Play,
    Pause,
}

#[derive(Properties, PartialEq)]
pub struct PlayerOverlayProps {
    pub state: PlaybackState,
    pub on_toggle_play: Callback<()>,
    pub video_ref: NodeRef,
    pub container_ref: NodeRef,
}

#[function_component(PlayerOverlay)]
pub fn player_overlay(props: &PlayerOverlayProps) -> Html {
    let feedback = use_state(|| None::<Feedback>);
    let hovering = use_state(|| false);
    let show_controls = use_state(|| true);
    let fullscreen = use_fullscreen(&props.container_ref);

    {
        let feedback = feedback.clone();
        use_effect_with(*feedback, move |current| {
            let timeout = current.map(|_| Timeout::new(FEEDBACK_FLASH_MS, move || feedback.set(None)));
            move || drop(timeout)
        });
    }

    {
        let show_controls = show_controls.clone();
        use_effect_with(*hovering, move |hovering| {
            let timeout = if *hovering {
                show_controls.set(true);
                None
            } else {
                Some(Timeout::new(CONTROLS_HIDE_DELAY_MS, move || show_controls.set(false)))
            };
            move || drop(timeout)
        });
    }

    let on_click = {
        let feedback = feedback.clone();
        let on_toggle_play = props.on_toggle_play.clone();
        let playing = props.state.is_playing();
        Callback::from(move |_: MouseEvent| {
            feedback.set(Some(if playing { Feedback::Pause } else { Feedback::Play }));
            on_toggle_play.emit(());
        })
    };

    let on_double_click = {
        let toggle = fullscreen.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_mouse_enter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };
    let on_mouse_leave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };

    html! {
        <div
            class="absolute inset-0 flex flex-col justify-end"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
        >
            <div
                class="absolute inset-0 flex cursor-pointer items-center justify-center"
                onclick={on_click}
                ondblclick={on_double_click}
            >
                {
                    match *feedback {
                        Some(Feedback::Play) => html! {
                            <div key="play" class="animate-ping rounded-full bg-black/50 p-4 text-white">
                                <PlayIcon size={36} />
                            </div>
                        },
                        Some(Feedback::Pause) => html! {
                            <div key="pause" class="animate-ping rounded-full bg-black/50 p-4 text-white">
                                <PauseIcon size={32} />
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>

            if props.state == PlaybackState::Buffering {
                <LoadingSpinner />
            }

            <PlayerControls
                state={props.state}
                on_toggle_play={props.on_toggle_play.clone()}
                video_ref={props.video_ref.clone()}
                visible={*show_controls}
                is_fullscreen={fullscreen.is_fullscreen}
                on_toggle_fullscreen={fullscreen.toggle.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlayerControlsProps {
    pub state: PlaybackState,
    pub on_toggle_play: Callback<()>,
    pub video_ref: NodeRef,
    pub visible: bool,
    pub is_fullscreen: bool,
    pub on_toggle_fullscreen: Callback<()>,
}

#[function_component(PlayerControls)]
pub fn player_controls(props: &PlayerControlsProps) -> Html {
    let disabled = !props.state.controls_enabled();
    let visibility = if props.visible {
        "opacity-100"
    } else {
        "pointer-events-none opacity-0"
    };

    html! {
        <div class={classes!("relative", "z-10", "bg-gradient-to-t", "from-black/70", "to-transparent", "px-4", "pb-3", "pt-8", "transition-opacity", "duration-300", visibility)}>
            <ProgressBar video_ref={props.video_ref.clone()} />
            <div class="mt-2 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <PlayPauseButton
                        playing={props.state.is_playing()}
                        disabled={disabled}
                        on_click={props.on_toggle_play.clone()}
                    />
                    <VolumeControl video_ref={props.video_ref.clone()} />
                </div>
                <div class="flex items-center gap-3">
                    <PlaybackSpeedMenu video_ref={props.video_ref.clone()} />
                    <FullscreenButton
                        is_fullscreen={props.is_fullscreen}
                        on_click={props.on_toggle_fullscreen.clone()}
                    />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlayPauseButtonProps {
    pub playing: bool,
    pub disabled: bool,
    pub on_click: Callback<()>,
}

#[function_component(PlayPauseButton)]
pub fn play_pause_button(props: &PlayPauseButtonProps) -> Html {
    let on_click = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };
    let label = if props.playing { "Pause" } else { "Play" };

    html! {
        <button
            type="button"
            class="cursor-pointer text-white disabled:cursor-not-allowed disabled:opacity-50"
            onclick={on_click}
            disabled={props.disabled}
            aria-label={label}
        >
            if props.playing {
                <PauseIcon size={28} />
            } else {
                <PlayIcon size={28} />
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaControlProps {
    pub video_ref: NodeRef,
}

#[function_component(VolumeControl)]
pub fn volume_control(props: &MediaControlProps) -> Html {
    let volume = use_state(VolumeState::default);
    let hovering = use_state(|| false);

    {
        let volume = volume.clone();
        use_media_event(&props.video_ref, "volumechange", move |video| {
            volume.set(VolumeState {
                volume: video.volume(),
                muted: video.muted(),
            });
        });
    }

    let on_toggle_mute = {
        let video_ref = props.video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                apply_volume(&video, live_volume(&video).toggled_mute());
            }
        })
    };

    let on_slider = {
        let video_ref = props.video_ref.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Ok(value) = input.value().parse::<f64>() else {
                return;
            };
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                apply_volume(&video, live_volume(&video).with_slider(value));
            }
        })
    };

    let on_mouse_enter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };
    let on_mouse_leave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };

    let shown = volume.effective() * 100.0;
    let slider_width = if *hovering { "width: 96px; opacity: 1" } else { "width: 0px; opacity: 0" };

    html! {
        <div class="flex items-center" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
            <button
                type="button"
                class="cursor-pointer text-xl text-white"
                onclick={on_toggle_mute}
                aria-label={if volume.muted { "Unmute" } else { "Mute" }}
            >
                <VolumeIcon level={volume.level()} />
            </button>
            <div class="ml-2 overflow-hidden transition-all duration-200 ease-in-out" style={slider_width}>
                <div class="relative w-24 py-2">
                    <div class="px-1.5">
                        <div class="relative h-1.5 rounded-full bg-white/30">
                            <div class="h-full rounded-full bg-white" style={format!("width: {shown}%")} />
                            <div
                                class="absolute top-1/2 h-3 w-3 -translate-x-1/2 -translate-y-1/2 rounded-full bg-white shadow-sm"
                                style={format!("left: {shown}%")}
                            />
                        </div>
                    </div>
                    <input
                        type="range"
                        min="0"
                        max="1"
                        step="0.01"
                        value={volume.effective().to_string()}
                        oninput={on_slider}
                        aria-label="Volume"
                        class="absolute inset-0 h-full w-full cursor-pointer opacity-0"
                    />
                </div>
            </div>
        </div>
    }
}

fn live_volume(video: &HtmlVideoElement) -> VolumeState {
    VolumeState {
        volume: video.volume(),
        muted: video.muted(),
    }
}

fn apply_volume(video: &HtmlVideoElement, state: VolumeState) {
    video.set_volume(state.volume);
    video.set_muted(state.muted);
}

#[function_component(PlaybackSpeedMenu)]
pub fn playback_speed_menu(props: &MediaControlProps) -> Html {
    let rate = use_state(|| 1.0_f64);
    let open = use_state(|| false);

    {
        let rate = rate.clone();
        use_media_event(&props.video_ref, "ratechange", move |video| {
            rate.set(video.playback_rate());
        });
    }

    let on_cycle = {
        let video_ref = props.video_ref.clone();
        let rate = rate.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                let next = next_rate(video.playback_rate());
                video.set_playback_rate(next);
                rate.set(next);
            }
        })
    };

    let on_select = {
        let video_ref = props.video_ref.clone();
        let rate = rate.clone();
        let open = open.clone();
        Callback::from(move |selected: f64| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_playback_rate(selected);
                rate.set(selected);
                open.set(false);
            }
        })
    };

    let on_mouse_enter = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_mouse_leave = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    // 6 buttons of 48px plus 5 gaps of 4px
    let menu_style = if *open { "width: 312px; opacity: 1" } else { "width: 0px; opacity: 0" };

    html! {
        <div class="flex items-center" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
            <div class="mr-2 overflow-hidden transition-all duration-200 ease-in-out" style={menu_style}>
                <div class="flex items-center space-x-1 py-1">
                    { for SPEED_OPTIONS.iter().map(|&option| {
                        let on_select = on_select.clone();
                        let class = if is_selected(option, *rate) {
                            "bg-white font-bold text-black"
                        } else {
                            "bg-black/60 text-white hover:bg-white/20"
                        };
                        html! {
                            <button
                                key={format_rate(option)}
                                type="button"
                                class={classes!("flex", "w-12", "cursor-pointer", "items-center", "justify-center", "rounded", "px-2", "py-1", class)}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(option))}
                            >
                                { format_rate(option) }
                            </button>
                        }
                    })}
                </div>
            </div>
            <button
                type="button"
                class="flex w-12 cursor-pointer items-center justify-center rounded bg-black/60 px-2 py-1 text-white hover:bg-white/20"
                onclick={on_cycle}
                aria-label="Playback speed"
            >
                { format_rate(*rate) }
            </button>
        </div>
    }
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &MediaControlProps) -> Html {
    let current_time = use_state(|| 0.0_f64);
    let duration = use_state(|| 0.0_f64);
    let hovering = use_state(|| false);
    let dragging = use_state(|| false);
    // Read from media handlers, which outlive the render that created them
    let dragging_flag = use_mut_ref(|| false);
    let bar_ref = use_node_ref();

    {
        let current_time = current_time.clone();
        let dragging_flag = dragging_flag.clone();
        use_media_event(&props.video_ref, "timeupdate", move |video| {
            if !*dragging_flag.borrow() {
                current_time.set(video.current_time());
            }
        });
    }
    {
        let duration = duration.clone();
        use_media_event(&props.video_ref, "loadedmetadata", move |video| {
            duration.set(video.duration());
        });
    }

    let seek: Rc<dyn Fn(i32)> = {
        let video_ref = props.video_ref.clone();
        let bar_ref = bar_ref.clone();
        let current_time = current_time.clone();
        Rc::new(move |client_x: i32| {
            let (Some(video), Some(bar)) = (video_ref.cast::<HtmlVideoElement>(), bar_ref.cast::<Element>())
            else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let time = seek_time(seek_fraction(client_x as f64, rect.left(), rect.width()), video.duration());
            video.set_current_time(time);
            current_time.set(time);
        })
    };

    {
        let seek = seek.clone();
        let dragging_handle = dragging.clone();
        let dragging_flag = dragging_flag.clone();
        use_effect_with(*dragging, move |dragging| {
            let listeners = if *dragging {
                web_sys::window()
                    .and_then(|window| window.document())
                    .map(|document| {
                        let on_move = EventListener::new(&document, "mousemove", move |event| {
                            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                seek(event.client_x());
                            }
                        });
                        let on_up = EventListener::new(&document, "mouseup", move |_| {
                            *dragging_flag.borrow_mut() = false;
                            dragging_handle.set(false);
                        });
                        vec![on_move, on_up]
                    })
            } else {
                None
            };
            move || drop(listeners)
        });
    }

    let on_mouse_down = {
        let seek = seek.clone();
        let dragging = dragging.clone();
        let dragging_flag = dragging_flag.clone();
        Callback::from(move |e: MouseEvent| {
            *dragging_flag.borrow_mut() = true;
            dragging.set(true);
            seek(e.client_x());
        })
    };

    let on_mouse_enter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };
    let on_mouse_leave = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(false))
    };

    let percent = progress_percent(*current_time, *duration);
    let handle_class = if *hovering || *dragging {
        "scale-100 opacity-100"
    } else {
        "scale-75 opacity-0"
    };

    html! {
        <div class="w-full">
            <div
                ref={bar_ref}
                class="group relative h-2 w-full cursor-pointer rounded-full bg-white/30"
                onmouseenter={on_mouse_enter}
                onmouseleave={on_mouse_leave}
                onmousedown={on_mouse_down}
            >
                <div class="h-full rounded-full bg-white" style={format!("width: {percent}%")} />
                <div
                    class={classes!("absolute", "top-1/2", "h-4", "w-4", "rounded-full", "bg-white", "transition-all", handle_class)}
                    style={format!("left: {percent}%; transform: translateX(-50%) translateY(-50%)")}
                />
            </div>
            <div class="mt-1 flex justify-between text-xs text-white/80">
                <span>{ format_time(Some(*current_time)) }</span>
                <span>{ format_time(Some(*duration)) }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FullscreenButtonProps {
    pub is_fullscreen: bool,
    pub on_click: Callback<()>,
}

#[function_component(FullscreenButton)]
pub fn fullscreen_button(props: &FullscreenButtonProps) -> Html {
    let on_click = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };
    let (label, path) = if props.is_fullscreen {
        ("Exit fullscreen", "M9 9H4M9 9V4M15 9h5M15 9V4M9 15H4M9 15v5M15 15h5M15 15v5")
    } else {
        ("Enter fullscreen", "M4 9V4h5M20 9V4h-5M4 15v5h5M20 15v5h-5")
    };

    html! {
        <button type="button" class="cursor-pointer text-white" onclick={on_click} aria-label={label}>
            <svg class="h-7 w-7" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" d={path} />
            </svg>
        </button>
    }
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="pointer-events-none absolute inset-0 flex items-center justify-center">
            <div class="h-12 w-12 animate-spin rounded-full border-4 border-white/30 border-t-white" role="status" aria-label="Loading" />
        </div>
    }
}

#[function_component(VideoPlayerSkeleton)]
pub fn video_player_skeleton() -> Html {
    html! {
        <div class="aspect-video w-full animate-pulse rounded-lg bg-gray-200" />
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(PlayIcon)]
pub fn play_icon(props: &IconProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()} viewBox="0 0 24 24" fill="currentColor">
            <path d="M8 5.14v13.72a1 1 0 0 0 1.5.86l11-6.86a1 1 0 0 0 0-1.72l-11-6.86A1 1 0 0 0 8 5.14z" />
        </svg>
    }
}

#[function_component(PauseIcon)]
pub fn pause_icon(props: &IconProps) -> Html {
    html! {
        <svg width={props.size.to_string()} height={props.size.to_string()} viewBox="0 0 24 24" fill="currentColor">
            <rect x="6" y="5" width="4" height="14" rx="1" />
            <rect x="14" y="5" width="4" height="14" rx="1" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct VolumeIconProps {
    level: VolumeLevel,
}

#[function_component(VolumeIcon)]
fn volume_icon(props: &VolumeIconProps) -> Html {
    let waves = match props.level {
        VolumeLevel::Muted => html! { <path d="M16 9l5 6M21 9l-5 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" /> },
        VolumeLevel::Low => html! { <path d="M15.5 8.5a5 5 0 0 1 0 7" stroke="currentColor" stroke-width="2" stroke-linecap="round" fill="none" /> },
        VolumeLevel::High => html! {
            <>
                <path d="M15.5 8.5a5 5 0 0 1 0 7" stroke="currentColor" stroke-width="2" stroke-linecap="round" fill="none" />
                <path d="M18.5 5.5a9 9 0 0 1 0 13" stroke="currentColor" stroke-width="2" stroke-linecap="round" fill="none" />
            </>
        },
    };

    html! {
        <svg width="28" height="28" viewBox="0 0 24 24" fill="currentColor">
            <path d="M4 9v6h4l5 4V5L8 9H4z" />
            { waves }
        </svg>
    }
}
