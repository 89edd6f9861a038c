//! # Switch selector
//!
//! A row of options with a highlight that slides to the selected one. The
//! selection changes on a tap, on a horizontal flick across the control, or
//! when the host changes the controlled `value`.
//!
//! The widget is a plain struct driven by explicit events:
//!
//! - [`SwitchSelector::handle_pointer`] for raw touches (taps and swipes),
//! - [`SwitchSelector::set_props`] / [`SwitchSelector::set_value`] when the
//!   host re-renders with new configuration,
//! - [`SwitchSelector::on_layout_measured`] (or [`SwitchSelector::measure`])
//!   once the track width is known,
//! - [`SwitchSelector::tick`] every frame while the slider moves.
//!
//! [`SwitchSelector::render`] is a pure function of that state.
//!
//! ## Slider position
//!
//! The slider sits at `fraction(i) = i / N` of the track width, negated
//! under RTL. A new selection always tweens from the nominal fraction of the
//! previously selected index, even if an earlier tween is still in flight.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use selector_core::style::{self, Palette, SizeKey, StyleType};
use selector_core::*;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::gestures::{GestureOutcome, GestureState, PanResponder, SwipeDirection};
use crate::label::{CustomIcon, LabelStyle, OptionLabel};
use crate::layout::{self, HitRegion};
use crate::{Box, Row, ViewExt};

/// Tag of the track node in the rendered tree.
pub const TRACK_TAG: u64 = u64::MAX;
/// Tag of the sliding highlight.
pub const SLIDER_TAG: u64 = u64::MAX - 1;

pub const DEFAULT_ANIMATION_MS: u64 = 100;
pub const DEFAULT_BORDER_RADIUS: f32 = 13.0;
pub const DEFAULT_ICON_SIZE: f32 = 30.0;
/// Opacity of an option band while a finger rests on it.
pub const ACTIVE_OPACITY: f32 = 0.5;
/// Height factor applied by `tight`.
const TIGHT_FACTOR: f32 = 2.2 / 3.0;

/// One choice of the selector.
#[derive(Clone)]
pub struct SelectorOption<T> {
    pub label: String,
    pub value: T,
    /// Slider color while this option is selected.
    pub active_color: Option<Color>,
    pub custom_icon: Option<CustomIcon>,
    pub image_icon: Option<ImageSource>,
}

impl<T> SelectorOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            active_color: None,
            custom_icon: None,
            image_icon: None,
        }
    }

    pub fn active_color(mut self, c: Color) -> Self {
        self.active_color = Some(c);
        self
    }

    pub fn icon(mut self, view: View) -> Self {
        self.custom_icon = Some(CustomIcon::View(view));
        self
    }

    pub fn icon_fn(mut self, make: impl Fn(bool) -> View + 'static) -> Self {
        self.custom_icon = Some(CustomIcon::Factory(Rc::new(make)));
        self
    }

    pub fn image(mut self, source: ImageSource) -> Self {
        self.image_icon = Some(source);
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for SelectorOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorOption")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("active_color", &self.active_color)
            .field("custom_icon", &self.custom_icon)
            .field("image_icon", &self.image_icon)
            .finish()
    }
}

/// What `on_press` receives: the whole option with `return_object`, else
/// just its value.
#[derive(Clone, Debug)]
pub enum Selection<T> {
    Full(SelectorOption<T>),
    Value(T),
}

impl<T> Selection<T> {
    pub fn value(&self) -> &T {
        match self {
            Selection::Full(o) => &o.value,
            Selection::Value(v) => v,
        }
    }
}

/// Partial text style applied on top of the resolved label style.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub line_height: Option<f32>,
    pub font_family: Option<String>,
}

/// Overrides for image icons. Unset fields keep the 30x30 icon tinted with
/// the label color.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub tint: Option<Color>,
}

/// Visual configuration. Everything is optional and falls back to the
/// palette and font metrics resolved from `style_type` / `size`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorStyle {
    #[serde(rename = "type")]
    pub style_type: StyleType,
    pub size: SizeKey,
    pub border_color: Option<Color>,
    pub border_width: f32,
    pub border_radius: f32,
    /// Pill shape: radius is half the button height.
    pub rounded: bool,
    /// Track is 2.2/3 of the button height.
    pub tight: bool,
    pub button_height: Option<f32>,
    /// Track color.
    pub background_color: Option<Color>,
    /// Slider color unless the selected option has its own.
    pub button_color: Option<Color>,
    pub text_color: Option<Color>,
    pub selected_color: Option<Color>,
    pub text_style: TextStyle,
    pub selected_text_style: TextStyle,
    pub text_font_size: Option<f32>,
    pub text_line_height: Option<f32>,
    pub text_font_family: Option<String>,
    pub image_style: ImageStyle,
}

impl Default for SelectorStyle {
    fn default() -> Self {
        Self {
            style_type: StyleType::Default,
            size: SizeKey::Medium,
            border_color: None,
            border_width: 0.0,
            border_radius: DEFAULT_BORDER_RADIUS,
            rounded: false,
            tight: false,
            button_height: None,
            background_color: None,
            button_color: None,
            text_color: None,
            selected_color: None,
            text_style: TextStyle::default(),
            selected_text_style: TextStyle::default(),
            text_font_size: None,
            text_line_height: None,
            text_font_family: None,
            image_style: ImageStyle::default(),
        }
    }
}

/// Construction-time configuration, built fluently.
#[derive(Clone)]
pub struct SelectorProps<T> {
    pub options: Vec<SelectorOption<T>>,
    pub initial: Option<usize>,
    /// Controlled selected index.
    pub value: Option<usize>,
    pub disabled: bool,
    pub disable_value_change_on_press: bool,
    pub return_object: bool,
    pub animation_duration: Duration,
    pub easing: Easing,
    /// Overrides the ambient text direction.
    pub direction: Option<TextDirection>,
    pub style: SelectorStyle,
    /// Extra modifier for the outermost row (padding and the like).
    pub container: Modifier,
    pub on_press: Option<Rc<dyn Fn(Selection<T>)>>,
}

impl<T> SelectorProps<T> {
    pub fn new(options: Vec<SelectorOption<T>>) -> Self {
        Self {
            options,
            initial: None,
            value: None,
            disabled: false,
            disable_value_change_on_press: false,
            return_object: false,
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
            easing: Easing::Cubic,
            direction: None,
            style: SelectorStyle::default(),
            container: Modifier::new(),
            on_press: None,
        }
    }
    pub fn initial(mut self, index: usize) -> Self {
        self.initial = Some(index);
        self
    }
    pub fn value(mut self, index: Option<usize>) -> Self {
        self.value = index;
        self
    }
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
    pub fn disable_value_change_on_press(mut self, v: bool) -> Self {
        self.disable_value_change_on_press = v;
        self
    }
    pub fn return_object(mut self, v: bool) -> Self {
        self.return_object = v;
        self
    }
    pub fn animation_duration(mut self, d: Duration) -> Self {
        self.animation_duration = d;
        self
    }
    pub fn easing(mut self, e: Easing) -> Self {
        self.easing = e;
        self
    }
    pub fn direction(mut self, d: TextDirection) -> Self {
        self.direction = Some(d);
        self
    }
    pub fn style(mut self, s: SelectorStyle) -> Self {
        self.style = s;
        self
    }
    pub fn container(mut self, m: Modifier) -> Self {
        self.container = m;
        self
    }
    pub fn on_press(mut self, f: impl Fn(Selection<T>) + 'static) -> Self {
        self.on_press = Some(Rc::new(f));
        self
    }

    fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.animation_duration, self.easing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorPhase {
    /// Track width unknown; slider hidden.
    Unmeasured,
    Idle,
    /// A drag is in progress, or its settle tween has not finished.
    Dragging,
}

/// Slider fraction for `index` of `count` options.
pub fn fraction(index: usize, count: usize, direction: TextDirection) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let f = index as f32 / count as f32;
    if direction.is_rtl() { -f } else { f }
}

pub struct SwitchSelector<T: Clone + 'static> {
    props: SelectorProps<T>,
    selected: usize,
    track_width: Option<f32>,
    position: AnimatedValue<f32>,
    last_value: Option<usize>,
    responder: PanResponder,
    settling: bool,
    pressed: Option<usize>,
    hit_regions: Vec<HitRegion>,
    clock: Arc<dyn Clock>,
}

impl<T: Clone + 'static> SwitchSelector<T> {
    pub fn new(props: SelectorProps<T>) -> Result<Self, SelectorError> {
        Self::with_clock(props, Arc::new(SystemClock))
    }

    pub fn with_clock(props: SelectorProps<T>, clock: Arc<dyn Clock>) -> Result<Self, SelectorError> {
        let count = props.options.len();
        if count == 0 {
            return Err(SelectorError::NoOptions);
        }
        let selected = match props.initial {
            Some(i) if i < count => i,
            Some(i) => {
                log::warn!("switch selector: initial index {i} out of range for {count} options, using 0");
                0
            }
            None => 0,
        };
        let direction = props.direction.unwrap_or_else(text_direction);
        let position = AnimatedValue::new(
            fraction(selected, count, direction),
            props.animation_spec(),
        );
        Ok(Self {
            last_value: props.value,
            props,
            selected,
            track_width: None,
            position,
            responder: PanResponder::new(),
            settling: false,
            pressed: None,
            hit_regions: Vec::new(),
            clock,
        })
    }

    pub fn props(&self) -> &SelectorProps<T> {
        &self.props
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> &SelectorOption<T> {
        &self.props.options[self.selected]
    }

    pub fn direction(&self) -> TextDirection {
        self.props.direction.unwrap_or_else(text_direction)
    }

    pub fn fraction(&self, index: usize) -> f32 {
        fraction(index, self.props.options.len(), self.direction())
    }

    pub fn phase(&self) -> SelectorPhase {
        if self.track_width.is_none() {
            SelectorPhase::Unmeasured
        } else if self.responder.is_active() || (self.settling && self.position.is_animating()) {
            SelectorPhase::Dragging
        } else {
            SelectorPhase::Idle
        }
    }

    pub fn track_width(&self) -> Option<f32> {
        self.track_width
    }

    /// Current (possibly mid-tween) slider fraction.
    pub fn animated_position(&self) -> f32 {
        *self.position.get()
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating()
    }

    /// Slider translation in px; `None` until the track is measured.
    pub fn slider_offset_px(&self) -> Option<f32> {
        self.track_width.map(|w| self.animated_position() * w)
    }

    /// Slider width in px; `None` until the track is measured.
    pub fn slider_width_px(&self) -> Option<f32> {
        self.track_width
            .map(|w| w / self.props.options.len() as f32)
    }

    /// Band under a resting finger that has not started a drag.
    pub fn pressed_index(&self) -> Option<usize> {
        self.pressed
    }

    pub fn hit_regions(&self) -> &[HitRegion] {
        &self.hit_regions
    }

    /// Advance the slider tween. Returns `true` while it is still moving.
    pub fn tick(&mut self) -> bool {
        let running = self.position.update(self.clock.now());
        if !running {
            self.settling = false;
        }
        running
    }

    /// Replace the configuration, then reconcile the controlled value.
    ///
    /// An empty option list is rejected and the previous props stay active.
    pub fn set_props(&mut self, props: SelectorProps<T>) -> Result<(), SelectorError> {
        if props.options.is_empty() {
            return Err(SelectorError::NoOptions);
        }
        self.props = props;
        self.position.set_spec(self.props.animation_spec());

        let last = self.props.options.len() - 1;
        if self.selected > last {
            log::debug!("switch selector: options shrank, clamping selection {} -> {last}", self.selected);
            self.selected = last;
            self.position.snap_to(self.fraction(last));
        }
        self.reconcile_value();
        Ok(())
    }

    /// Update only the controlled value.
    pub fn set_value(&mut self, value: Option<usize>) {
        self.props.value = value;
        self.reconcile_value();
    }

    fn reconcile_value(&mut self) {
        if self.props.value == self.last_value {
            return;
        }
        self.last_value = self.props.value;
        if let Some(index) = self.props.value {
            let notify = !self.props.disable_value_change_on_press;
            self.toggle_item(index, notify);
        }
    }

    /// User tap on option `index`.
    pub fn select_by_tap(&mut self, index: usize) -> bool {
        if self.props.disabled {
            return false;
        }
        self.toggle_item(index, true)
    }

    /// Evaluate a finished drag. Returns the classified direction, whether or
    /// not it moved the selection.
    pub fn select_by_swipe(&mut self, gesture: &GestureState) -> Option<SwipeDirection> {
        if self.props.disabled {
            return None;
        }
        let direction = gesture.swipe_direction();
        let last = self.props.options.len() - 1;
        match direction {
            Some(SwipeDirection::Right) if self.selected < last => {
                self.toggle_item(self.selected + 1, true);
            }
            Some(SwipeDirection::Left) if self.selected > 0 => {
                self.toggle_item(self.selected - 1, true);
            }
            _ => {}
        }
        direction
    }

    /// Record the measured track width (px). Non-positive widths leave the
    /// widget unmeasured.
    pub fn on_layout_measured(&mut self, width: f32) {
        let width = (width.is_finite() && width > 0.0).then_some(width);
        if width != self.track_width {
            log::debug!("switch selector: track width {:?} -> {:?}", self.track_width, width);
            self.track_width = width;
        }
    }

    /// Lay out the rendered tree in `available_width`, record option hit
    /// regions and feed the track width to [`Self::on_layout_measured`].
    pub fn measure(&mut self, available_width: f32) -> Result<f32, SelectorError> {
        let direction = self.direction();
        let view = self.render();
        let result = with_text_direction(direction, || layout::layout(&view, available_width))?;

        let to_dp = |r: Rect| {
            Rect::new(
                r.x / result.scale,
                r.y / result.scale,
                r.w / result.scale,
                r.h / result.scale,
            )
        };
        let count = self.props.options.len() as u64;
        self.hit_regions = result
            .hit_regions
            .iter()
            .filter(|r| r.tag < count)
            .map(|r| HitRegion {
                tag: r.tag,
                rect: to_dp(r.rect),
            })
            .collect();

        let width = result.rect_of_tag(TRACK_TAG).map(|r| to_dp(r).w).unwrap_or(0.0);
        self.on_layout_measured(width);
        Ok(width)
    }

    /// Feed a raw pointer event (coordinates local to the selector).
    pub fn handle_pointer(&mut self, ev: &PointerEvent) {
        let outcome = self.responder.handle_pointer(ev);
        self.pressed = match (ev.event, outcome) {
            (PointerEventKind::Down, GestureOutcome::None)
                if self.responder.state().touch_count == 1 && !self.props.disabled =>
            {
                self.option_at(ev.position)
            }
            (PointerEventKind::Move, GestureOutcome::None) => self.pressed,
            _ => None,
        };

        match outcome {
            GestureOutcome::Tap(p) => {
                if let Some(index) = self.option_at(p) {
                    self.select_by_tap(index);
                }
            }
            GestureOutcome::Activated => {
                log::trace!("switch selector: drag started");
            }
            GestureOutcome::Released(g) | GestureOutcome::Terminated(g) => {
                self.settling = true;
                self.select_by_swipe(&g);
            }
            GestureOutcome::None => {}
        }
    }

    /// Option band under `p`, from the last [`Self::measure`], or from equal
    /// division of the track when only the width was reported.
    pub fn option_at(&self, p: Vec2) -> Option<usize> {
        if !self.hit_regions.is_empty() {
            return self
                .hit_regions
                .iter()
                .find(|r| r.rect.contains(p))
                .map(|r| r.tag as usize);
        }
        let width = self.track_width?;
        if p.x < 0.0 || p.x > width {
            return None;
        }
        let count = self.props.options.len();
        let band = ((p.x / width * count as f32) as usize).min(count - 1);
        Some(if self.direction().is_rtl() {
            count - 1 - band
        } else {
            band
        })
    }

    fn toggle_item(&mut self, index: usize, call_on_press: bool) -> bool {
        let count = self.props.options.len();
        if count <= 1 || index >= count {
            return false;
        }
        let target = self.fraction(index);
        let from = self.fraction(self.selected);
        self.animate_to(target, from);
        self.selected = index;

        let option = &self.props.options[index];
        match &self.props.on_press {
            Some(on_press) if call_on_press => {
                let selection = if self.props.return_object {
                    Selection::Full(option.clone())
                } else {
                    Selection::Value(option.value.clone())
                };
                let on_press = on_press.clone();
                on_press(selection);
            }
            _ => {
                log::info!(
                    "switch selector selected {:?} (index {index}) without notifying on_press",
                    option.label
                );
            }
        }
        true
    }

    fn animate_to(&mut self, target: f32, from: f32) {
        let now = self.clock.now();
        self.position.animate(from, target, now);
    }

    fn palette(&self) -> Palette {
        style::resolve(self.props.style.style_type)
    }

    fn label_style(&self, palette: &Palette, selected: bool) -> LabelStyle {
        let s = &self.props.style;
        let metrics = style::resolve_size(s.size);
        let base = if selected {
            s.selected_color.unwrap_or(palette.foreground)
        } else {
            s.text_color.unwrap_or(palette.foreground_inverse)
        };
        let over = if selected {
            &s.selected_text_style
        } else {
            &s.text_style
        };
        let family = s
            .text_font_family
            .clone()
            .unwrap_or_else(|| style::font_family_for(style::BUTTON_FONT_SIZE).to_string());
        LabelStyle {
            color: over.color.unwrap_or(base),
            icon_tint: s.image_style.tint.unwrap_or(base),
            icon_width: s.image_style.width.unwrap_or(DEFAULT_ICON_SIZE),
            icon_height: s.image_style.height.unwrap_or(DEFAULT_ICON_SIZE),
            font_size: over
                .font_size
                .unwrap_or(s.text_font_size.unwrap_or(metrics.font_size)),
            line_height: over
                .line_height
                .unwrap_or(s.text_line_height.unwrap_or(metrics.line_height)),
            font_family: over.font_family.clone().unwrap_or(family),
        }
    }

    /// Button height in dp before `tight` is applied.
    pub fn button_height(&self) -> f32 {
        let s = &self.props.style;
        let font_size = s
            .text_font_size
            .unwrap_or(style::resolve_size(s.size).font_size);
        s.button_height.unwrap_or(font_size * 3.0)
    }

    pub fn render(&self) -> View {
        let s = &self.props.style;
        let palette = self.palette();
        let count = self.props.options.len();
        let rtl = self.direction().is_rtl();

        let height = self.button_height();
        let track_height = if s.tight { height * TIGHT_FACTOR } else { height };
        let radius = if s.rounded { height / 2.0 } else { s.border_radius };

        let slider = self.track_width.map(|w| {
            let color = self
                .selected_option()
                .active_color
                .or(s.button_color)
                .unwrap_or(palette.background);
            let anchored = if rtl {
                Modifier::new().offset_right(0.0)
            } else {
                Modifier::new().offset_left(0.0)
            };
            Box(anchored
                .absolute()
                .offset_top(0.0)
                .size(w / count as f32, track_height)
                .background(color)
                .clip_rounded(radius)
                .translate(self.animated_position() * w, 0.0)
                .tag(SLIDER_TAG))
        });

        let bands: Vec<View> = self
            .props
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let selected = i == self.selected;
                let label_style = self.label_style(&palette, selected);
                let mut band = Modifier::new()
                    .flex_grow(1.0)
                    .center()
                    .clickable()
                    .tag(i as u64);
                if self.pressed == Some(i) {
                    band = band.alpha(ACTIVE_OPACITY);
                }
                Row(band)
                    .child(OptionLabel(option, selected, &label_style))
                    .semantics(
                        Semantics::new(Role::Button)
                            .label(option.label.clone())
                            .selected(selected)
                            .enabled(!self.props.disabled),
                    )
            })
            .collect();

        let inner = Row(Modifier::new().flex_grow(1.0).border(
            s.border_width,
            s.border_color.unwrap_or(Color::TRANSPARENT),
        ))
        .child((slider, bands));

        let track = Box(Modifier::new()
            .flex_grow(1.0)
            .height(track_height)
            .background(s.background_color.unwrap_or(palette.foreground))
            .clip_rounded(radius)
            .tag(TRACK_TAG))
        .child(inner);

        Row(self.props.container.clone().fill_max_width())
            .child(track)
            .semantics(Semantics::new(Role::TabList).enabled(!self.props.disabled))
    }
}
