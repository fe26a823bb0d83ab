//!
//! Form field with a label, a single line input and an error slot.
//!
//! * The label is rendered above the input and uses the error style
//!   while there is an error message.
//! * The error row is always rendered. Without an error it shows a
//!   non-breaking space, so the height of the field never changes.
//! * The input line is a rat-text [TextInput]. With a [Mask] every
//!   change is reduced to digits and run through the mask. Without a
//!   mask the field only accepts digits.
//! * The value is controlled by the owner. [TextFieldState::sync_value]
//!   overwrites the displayed value whenever the owners value changes,
//!   and every edit reports the effective value via the change callback.
//!
//! ```rust ignore
//! use rat_field::text_field::{TextField, TextFieldState};
//!
//! let mut phone = TextFieldState::new("phone", "contact-phone")
//!     .with_mask("(###) ###-####")
//!     .with_on_change(|change| debug!("{} = {}", change.name, change.value));
//!
//! phone.sync_value(model.phone.as_deref());
//!
//! TextField::new()
//!     .label("Phone")
//!     .errors(model.phone_error.as_str())
//!     .render(area, frame.buffer_mut(), &mut phone);
//! if let Some((cx, cy)) = phone.screen_cursor() {
//!     frame.set_cursor_position((cx, cy));
//! }
//! ```
//!
//! The visual cursor must be set separately after rendering.
//!
//! Event handling by calling the freestanding fn [handle_events].
//! There's [handle_mouse_events] if you want to override the default key bindings but keep
//! the mouse behaviour.
//!
use crate::_private::NonExhaustive;
use crate::event::{FieldOutcome, HandleEvent, MouseOnly, Regular};
use rat_text::event::ReadOnly;
use crate::mask::{digit_count, digits_only, Mask};
use crate::FieldError;
use log::{debug, trace};
use rat_event::ct_event;
use rat_focus::FocusFlag;
use rat_text::event::TextOutcome;
use rat_text::text_input::{TextInput, TextInputState};
use rat_text::{upos_type, HasScreenCursor};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use std::borrow::Cow;
use std::cmp::min;
use std::fmt::{Debug, Formatter};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Shown in the error row if there is no error.
pub const BLANK_ERROR: &str = "\u{a0}";

/// Form field widget.
#[derive(Debug, Default, Clone)]
pub struct TextField<'a> {
    label: Option<Cow<'a, str>>,
    errors: Option<Cow<'a, str>>,
    block: Option<Block<'a>>,

    style: Style,
    input_style: Option<Style>,
    focus_style: Option<Style>,
    disabled_style: Option<Style>,
    placeholder_style: Option<Style>,
    label_style: Option<Style>,
    label_error_style: Option<Style>,
    error_style: Option<Style>,
}

/// Combined styles for the field.
#[derive(Debug, Clone)]
pub struct TextFieldStyle {
    /// Base style for the input.
    pub style: Style,
    /// Patched onto the base style.
    pub input: Option<Style>,
    pub focus: Option<Style>,
    pub disabled: Option<Style>,
    pub placeholder: Option<Style>,
    pub label: Option<Style>,
    /// Label while there is an error message.
    pub label_error: Option<Style>,
    pub error: Option<Style>,
    pub block: Option<Block<'static>>,

    pub non_exhaustive: NonExhaustive,
}

/// Standard input attributes that are forwarded to the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAttrs {
    /// Shown while the value is empty.
    pub placeholder: Option<String>,
    /// No event-handling, rendered with the disabled style.
    pub disabled: bool,
    /// Navigation only.
    pub read_only: bool,
    /// Maximum length of the value in chars.
    pub max_length: Option<usize>,
    /// Start with the focus.
    pub auto_focus: bool,

    pub non_exhaustive: NonExhaustive,
}

/// Reported for every change of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChange<'a> {
    /// Field name.
    pub name: &'a str,
    /// The value after masking.
    pub value: &'a str,
}

/// Change callback.
pub type OnChange = Box<dyn FnMut(&FieldChange<'_>) + 'static>;

/// State & event-handling.
pub struct TextFieldState {
    /// The whole area.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Label area. Empty without a label.
    /// __readonly__. renewed for each render.
    pub label_area: Rect,
    /// Input area including the block.
    /// __readonly__. renewed for each render.
    pub input_area: Rect,
    /// Input area inside the block.
    /// __readonly__. renewed for each render.
    pub inner: Rect,
    /// Error row.
    /// __readonly__. renewed for each render.
    pub error_area: Rect,

    /// The input line. Holds the displayed value, cursor and offset.
    pub input: TextInputState,
    /// Current focus state. Named after the field id and
    /// shared with the input line.
    pub focus: FocusFlag,

    name: String,
    id: String,
    mask: Option<Mask>,
    attrs: InputAttrs,

    /// Last value set by the owner.
    external: String,

    on_change: Option<OnChange>,

    pub non_exhaustive: NonExhaustive,
}

impl Default for TextFieldStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            input: None,
            focus: None,
            disabled: None,
            placeholder: None,
            label: None,
            label_error: None,
            error: None,
            block: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Default for InputAttrs {
    fn default() -> Self {
        Self {
            placeholder: None,
            disabled: false,
            read_only: false,
            max_length: None,
            auto_focus: false,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl InputAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }
}

impl<'a> TextField<'a> {
    /// New
    pub fn new() -> Self {
        Self::default()
    }

    /// Label text.
    #[inline]
    pub fn label(mut self, label: impl Into<Cow<'a, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Error message. An empty message counts as no error.
    #[inline]
    pub fn errors(mut self, errors: impl Into<Cow<'a, str>>) -> Self {
        self.errors = Some(errors.into());
        self
    }

    /// There is a non-empty error message.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Set the combined style.
    #[inline]
    pub fn styles(mut self, styles: TextFieldStyle) -> Self {
        self.style = styles.style;
        if styles.input.is_some() {
            self.input_style = styles.input;
        }
        if styles.focus.is_some() {
            self.focus_style = styles.focus;
        }
        if styles.disabled.is_some() {
            self.disabled_style = styles.disabled;
        }
        if styles.placeholder.is_some() {
            self.placeholder_style = styles.placeholder;
        }
        if styles.label.is_some() {
            self.label_style = styles.label;
        }
        if styles.label_error.is_some() {
            self.label_error_style = styles.label_error;
        }
        if styles.error.is_some() {
            self.error_style = styles.error;
        }
        if styles.block.is_some() {
            self.block = styles.block;
        }
        self
    }

    /// Base style for the input.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }

    /// Extra style for this one field. It is patched onto the base style.
    #[inline]
    pub fn input_style(mut self, style: impl Into<Style>) -> Self {
        self.input_style = Some(style.into());
        self
    }

    /// Style when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Style when disabled.
    #[inline]
    pub fn disabled_style(mut self, style: impl Into<Style>) -> Self {
        self.disabled_style = Some(style.into());
        self
    }

    /// Style for the placeholder text.
    #[inline]
    pub fn placeholder_style(mut self, style: impl Into<Style>) -> Self {
        self.placeholder_style = Some(style.into());
        self
    }

    /// Label style.
    #[inline]
    pub fn label_style(mut self, style: impl Into<Style>) -> Self {
        self.label_style = Some(style.into());
        self
    }

    /// Label style while there is an error.
    #[inline]
    pub fn label_error_style(mut self, style: impl Into<Style>) -> Self {
        self.label_error_style = Some(style.into());
        self
    }

    /// Style for the error message.
    #[inline]
    pub fn error_style(mut self, style: impl Into<Style>) -> Self {
        self.error_style = Some(style.into());
        self
    }

    /// Block around the input.
    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Height needed to render the whole field.
    pub fn height(&self) -> u16 {
        self.label_height() + self.input_height() + 1
    }

    fn label_height(&self) -> u16 {
        if self.label.is_some() {
            1
        } else {
            0
        }
    }

    fn input_height(&self) -> u16 {
        if let Some(block) = &self.block {
            // any height that holds the borders and padding will do.
            let area = Rect::new(0, 0, 1, u16::MAX / 2);
            1 + area.height.saturating_sub(block.inner(area).height)
        } else {
            1
        }
    }

    /// Resulting label style.
    pub fn resolved_label_style(&self) -> Style {
        if self.has_errors() {
            self.label_error_style
                .unwrap_or_else(|| Style::default().red())
        } else {
            self.label_style.unwrap_or_default()
        }
    }

    /// Resulting style for the input line.
    pub fn resolved_input_style(&self, focused: bool, disabled: bool) -> Style {
        let mut style = self.style;
        if let Some(input_style) = self.input_style {
            style = style.patch(input_style);
        }
        if disabled {
            style = style.patch(self.disabled_style.unwrap_or_else(|| Style::default().dim()));
        } else if focused {
            if let Some(focus_style) = self.focus_style {
                style = style.patch(focus_style);
            }
        }
        style
    }
}

impl<'a> StatefulWidget for &TextField<'a> {
    type State = TextFieldState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl<'a> StatefulWidget for TextField<'a> {
    type State = TextFieldState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &TextField<'_>, area: Rect, buf: &mut Buffer, state: &mut TextFieldState) {
    state.area = area;

    let l = Layout::vertical([
        Constraint::Length(widget.label_height()),
        Constraint::Length(widget.input_height()),
        Constraint::Length(1),
    ])
    .split(area);
    state.label_area = l[0];
    state.input_area = l[1];
    state.error_area = l[2];

    if let Some(label) = &widget.label {
        Line::styled(&label[..], widget.resolved_label_style()).render(state.label_area, buf);
    }

    render_input(widget, buf, state);

    let error_style = widget
        .error_style
        .unwrap_or_else(|| Style::default().red());
    let error = match &widget.errors {
        Some(errors) if !errors.is_empty() => &errors[..],
        _ => BLANK_ERROR,
    };
    Line::styled(error, error_style).render(state.error_area, buf);
}

fn render_input(widget: &TextField<'_>, buf: &mut Buffer, state: &mut TextFieldState) {
    let style = widget.resolved_input_style(state.is_focused(), state.attrs.disabled);

    let mut input = TextInput::new().style(style).focus_style(style);
    if let Some(block) = &widget.block {
        input = input.block(block.clone());
    }
    input.render(state.input_area, buf, &mut state.input);
    state.inner = state.input.inner;

    if state.is_empty() {
        if let Some(placeholder) = &state.attrs.placeholder {
            let placeholder_style = style.patch(
                widget
                    .placeholder_style
                    .unwrap_or_else(|| Style::default().dark_gray()),
            );
            Line::styled(placeholder.as_str(), placeholder_style).render(state.inner, buf);
        }
    }
}

impl Debug for TextFieldState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFieldState")
            .field("area", &self.area)
            .field("label_area", &self.label_area)
            .field("input_area", &self.input_area)
            .field("inner", &self.inner)
            .field("error_area", &self.error_area)
            .field("input", &self.input)
            .field("focus", &self.focus)
            .field("name", &self.name)
            .field("id", &self.id)
            .field("mask", &self.mask)
            .field("attrs", &self.attrs)
            .field("external", &self.external)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl TextFieldState {
    /// New field. The focus flag is named after the id.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        let id = id.into();
        let focus = FocusFlag::named(id.as_str());
        let mut input = TextInputState::default();
        input.focus = focus.clone();
        Self {
            area: Default::default(),
            label_area: Default::default(),
            input_area: Default::default(),
            inner: Default::default(),
            error_area: Default::default(),
            input,
            focus,
            name: name.into(),
            id,
            mask: None,
            attrs: Default::default(),
            external: Default::default(),
            on_change: None,
            non_exhaustive: NonExhaustive,
        }
    }

    /// With input mask.
    pub fn with_mask(mut self, mask: impl Into<Mask>) -> Self {
        self.set_mask(Some(mask.into()));
        self
    }

    /// With input attributes.
    pub fn with_attrs(mut self, attrs: InputAttrs) -> Self {
        self.set_attrs(attrs);
        self
    }

    /// With an initial value.
    pub fn with_value(mut self, value: &str) -> Self {
        self.sync_value(Some(value));
        self
    }

    /// With a change callback.
    pub fn with_on_change(mut self, on_change: impl FnMut(&FieldChange<'_>) + 'static) -> Self {
        self.set_on_change(Some(on_change));
        self
    }

    /// Field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Input mask.
    #[inline]
    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Set the input mask.
    ///
    /// The current value stays as is until the next edit or sync.
    #[inline]
    pub fn set_mask(&mut self, mask: Option<Mask>) {
        self.mask = mask;
    }

    /// Input attributes.
    #[inline]
    pub fn attrs(&self) -> &InputAttrs {
        &self.attrs
    }

    /// Set the input attributes.
    pub fn set_attrs(&mut self, attrs: InputAttrs) {
        if attrs.auto_focus {
            self.focus.set(true);
        }
        self.attrs = attrs;
    }

    /// Set the change callback.
    pub fn set_on_change(&mut self, on_change: Option<impl FnMut(&FieldChange<'_>) + 'static>) {
        self.on_change = match on_change {
            None => None,
            Some(v) => Some(Box::new(v)),
        };
    }

    /// Has the focus.
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focus.get()
    }

    /// Accepts edits.
    #[inline]
    pub fn is_editable(&self) -> bool {
        !self.attrs.disabled && !self.attrs.read_only
    }
}

impl TextFieldState {
    /// Displayed value.
    #[inline]
    pub fn value(&self) -> &str {
        self.input.text()
    }

    /// Last value set by the owner.
    #[inline]
    pub fn external_value(&self) -> &str {
        self.external.as_str()
    }

    /// Empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Length in graphemes. Digits and the usual mask literals
    /// are one grapheme each.
    #[inline]
    pub fn len(&self) -> usize {
        self.input.len() as usize
    }

    /// Take over the owners value.
    ///
    /// If the value differs from the last one given, it replaces the
    /// displayed value. Repeating the same value does nothing, so this
    /// can be called before each render. `None` is the same as an empty
    /// value.
    ///
    /// Returns true if the displayed value changed.
    pub fn sync_value(&mut self, value: Option<&str>) -> bool {
        let value = value.unwrap_or_default();
        if self.external == value {
            return false;
        }
        self.external = value.to_string();

        if self.input.text() == value {
            // the owner caught up with our last change.
            false
        } else {
            debug!("sync {}: {:?}", self.name, value);
            self.input.set_text(value);
            self.input.move_to_line_end(false);
            self.input.scroll_cursor_to_visible();
            true
        }
    }

    /// The effective value for some raw input.
    ///
    /// Removes everything but digits, applies the mask if any and
    /// truncates to the max length.
    pub fn effective_value(&self, raw: &str) -> String {
        let digits = digits_only(raw);
        let value = match &self.mask {
            Some(mask) => mask.apply(&digits),
            None => digits,
        };
        match self.attrs.max_length {
            Some(max) if value.chars().count() > max => value.chars().take(max).collect(),
            _ => value,
        }
    }

    /// Byte position of the char at pos.
    pub fn byte_at(&self, pos: usize) -> Result<usize, FieldError> {
        let len = self.value().chars().count();
        if pos > len {
            Err(FieldError::PositionOutOfBounds(pos, len))
        } else {
            Ok(self.byte_pos(pos))
        }
    }

    /// Text slice for a char range.
    pub fn str_slice(&self, range: Range<usize>) -> Result<&str, FieldError> {
        let len = self.value().chars().count();
        if range.start > range.end || range.end > len {
            Err(FieldError::RangeOutOfBounds(range.start, range.end, len))
        } else {
            Ok(&self.value()[self.byte_pos(range.start)..self.byte_pos(range.end)])
        }
    }

    // clamps to the end of the value.
    fn byte_pos(&self, pos: usize) -> usize {
        let value = self.value();
        value
            .char_indices()
            .nth(pos)
            .map(|(byte, _)| byte)
            .unwrap_or(value.len())
    }

    /// Run the edited text of the input line through the mask,
    /// store it and report the change.
    ///
    /// The cursor goes behind the same number of filled mask slots
    /// it had in the edited text. Digits absorbed by a literal don't
    /// count. With no slot before it, it stays behind the leading
    /// literals.
    ///
    /// Returns true if the value differs from before.
    fn commit(&mut self, before: &str) -> bool {
        let raw = self.input.text().to_string();
        let raw_cursor = self.input.cursor() as usize;
        let prefix = raw.graphemes(true).take(raw_cursor).collect::<String>();
        let digits = digits_only(&prefix);

        let value = self.effective_value(&raw);
        let cursor = match &self.mask {
            Some(mask) => match mask.filled_slots(&digits) {
                0 => min(raw_cursor, mask.first_slot()),
                n => mask.pos_after_slots(n),
            },
            None => digits.len(),
        };
        let cursor = min(cursor, value.chars().count());

        if value != raw {
            self.input.set_text(value.as_str());
        }
        self.input.set_cursor(cursor as upos_type, false);
        self.input.scroll_cursor_to_visible();

        self.notify();
        self.input.text() != before
    }

    fn notify(&mut self) {
        debug!("change {}: {:?}", self.name, self.input.text());
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&FieldChange {
                name: &self.name,
                value: self.input.text(),
            });
        }
    }

    /// Run an edit of the input line and commit it.
    ///
    /// An edit that reaches the mask is at least Changed, even if the
    /// value stays the same.
    fn edit(&mut self, f: impl FnOnce(&mut TextInputState) -> bool) -> FieldOutcome {
        if !self.is_editable() {
            trace!("edit {}: not editable", self.name);
            return FieldOutcome::Unchanged;
        }
        let before = self.input.text().to_string();
        if f(&mut self.input) {
            self.committed(&before)
        } else {
            FieldOutcome::Unchanged
        }
    }

    fn committed(&mut self, before: &str) -> FieldOutcome {
        if self.commit(before) {
            FieldOutcome::ValueChanged
        } else {
            FieldOutcome::Changed
        }
    }
}

impl TextFieldState {
    /// Reset to empty.
    ///
    /// Returns true if the value changed.
    pub fn clear(&mut self) -> bool {
        self.edit(|input| input.clear()) == FieldOutcome::ValueChanged
    }

    /// Insert a char at the current position.
    ///
    /// Returns true if the value changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        self.edit(|input| input.insert_char(c)) == FieldOutcome::ValueChanged
    }

    /// Insert a string at the current position.
    ///
    /// Returns true if the value changed.
    pub fn insert_str(&mut self, text: &str) -> bool {
        self.edit(|input| input.insert_str(text)) == FieldOutcome::ValueChanged
    }

    /// Delete the char before the cursor.
    ///
    /// Deleting a literal of the mask leaves the value as is,
    /// but moves the cursor.
    pub fn delete_prev_char(&mut self) -> bool {
        self.edit(|input| input.delete_prev_char()) == FieldOutcome::ValueChanged
    }

    /// Delete the char after the cursor.
    pub fn delete_next_char(&mut self) -> bool {
        self.edit(|input| input.delete_next_char()) == FieldOutcome::ValueChanged
    }
}

impl TextFieldState {
    /// Cursor position.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.input.cursor() as usize
    }

    /// Set the cursor position. Clamped to the length of the value.
    pub fn set_cursor(&mut self, cursor: usize) -> bool {
        let cursor = min(cursor, self.len());
        self.input.set_cursor(cursor as upos_type, false)
    }

    /// Offset shown.
    #[inline]
    pub fn offset(&self) -> usize {
        self.input.offset() as usize
    }

    /// Offset shown. This is corrected if the cursor wouldn't be visible.
    #[inline]
    pub fn set_offset(&mut self, offset: usize) {
        self.input.set_offset(offset as upos_type);
    }

    /// Move to the next char.
    #[inline]
    pub fn move_right(&mut self) -> bool {
        self.input.move_right(false)
    }

    /// Move to the previous char.
    #[inline]
    pub fn move_left(&mut self) -> bool {
        self.input.move_left(false)
    }

    /// Start of line
    #[inline]
    pub fn move_to_line_start(&mut self) -> bool {
        self.input.move_to_line_start(false)
    }

    /// End of line
    #[inline]
    pub fn move_to_line_end(&mut self) -> bool {
        self.input.move_to_line_end(false)
    }

    /// Number of digits before the cursor.
    pub fn digits_before_cursor(&self) -> usize {
        let prefix = self
            .value()
            .graphemes(true)
            .take(self.cursor())
            .collect::<String>();
        digit_count(&prefix)
    }

    /// Set the cursor from a screen position relative to the input area.
    pub fn set_screen_cursor(&mut self, scx: u16) -> bool {
        self.input.set_screen_cursor(scx as i16, false)
    }

    /// The current text cursor as an absolute screen position.
    pub fn screen_cursor(&self) -> Option<(u16, u16)> {
        if self.attrs.disabled {
            return None;
        }
        self.input
            .screen_cursor()
            .filter(|(cx, _)| *cx >= self.inner.left() && *cx < self.inner.right())
    }

    /// Set the focus. Returns true if it changed.
    pub fn focus_field(&self) -> bool {
        if self.focus.get() {
            false
        } else {
            self.focus.set(true);
            true
        }
    }
}

impl HandleEvent<crossterm::event::Event, Regular, FieldOutcome> for TextFieldState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: Regular) -> FieldOutcome {
        if self.attrs.disabled {
            return FieldOutcome::Continue;
        }

        let mut r = if self.is_focused() {
            match event {
                crossterm::event::Event::Paste(text) => self.edit(|input| input.insert_str(text)),

                ct_event!(key press _)
                | ct_event!(key press SHIFT-_)
                | ct_event!(key press CONTROL_ALT-_)
                | ct_event!(keycode press Backspace)
                | ct_event!(keycode press Delete)
                | ct_event!(key press CONTROL-'d')
                    if !self.is_editable() =>
                {
                    trace!("edit {}: not editable", self.name);
                    FieldOutcome::Unchanged
                }
                _ if self.is_editable() => {
                    let before = self.input.text().to_string();
                    match self.input.handle(event, Regular) {
                        TextOutcome::TextChanged => self.committed(&before),
                        r => r.into(),
                    }
                }
                _ => self.input.handle(event, ReadOnly).into(),
            }
        } else {
            FieldOutcome::Continue
        };

        if r == FieldOutcome::Continue {
            r = self.handle(event, MouseOnly);
        }
        r
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, FieldOutcome> for TextFieldState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: MouseOnly) -> FieldOutcome {
        if self.attrs.disabled {
            return FieldOutcome::Continue;
        }

        match event {
            ct_event!(mouse down Left for column,row)
                if self.inner.contains(Position::new(*column, *row)) =>
            {
                let f = self.focus_field();
                let c = self.set_screen_cursor(*column - self.inner.x);
                (f || c).into()
            }
            ct_event!(mouse down Left for column,row)
                if self.label_area.contains(Position::new(*column, *row)) =>
            {
                self.focus_field().into()
            }
            _ => self.input.handle(event, MouseOnly).into(),
        }
    }
}

/// Handle all events.
/// Text events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut TextFieldState,
    focus: bool,
    event: &crossterm::event::Event,
) -> FieldOutcome {
    state.focus.set(focus);
    state.handle(event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut TextFieldState,
    event: &crossterm::event::Event,
) -> FieldOutcome {
    state.handle(event, MouseOnly)
}
