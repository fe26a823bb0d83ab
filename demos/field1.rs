use crate::mini_salsa::{run_ui, setup_logging, MiniSalsaState};
use rat_field::event::{ct_event, ConsumedEvent, FieldOutcome, HandleEvent, Outcome, Regular};
use rat_field::mask::digits_only;
use rat_field::text_field::{FieldChange, InputAttrs, TextField, TextFieldState};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use ratatui::Frame;
use std::cell::RefCell;
use std::rc::Rc;

mod mini_salsa;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    // the owner of the values.
    let mut data = Data {
        model: Rc::new(RefCell::new(Model::default())),
    };

    let mut state = State {
        fields: [
            TextFieldState::new("phone", "contact-phone")
                .with_mask("(###) ###-####")
                .with_attrs(InputAttrs::new().placeholder("(555) 123-4567").auto_focus(true)),
            TextFieldState::new("birthday", "contact-birthday")
                .with_mask("##/##/####")
                .with_attrs(InputAttrs::new().placeholder("mm/dd/yyyy")),
            TextFieldState::new("pin", "contact-pin")
                .with_attrs(InputAttrs::new().placeholder("4 digits").max_length(4)),
            TextFieldState::new("account", "contact-account")
                .with_value("0815")
                .with_attrs(InputAttrs::new().read_only(true)),
        ],
        focus_idx: 0,
    };

    for field in state.fields.iter_mut() {
        let model = data.model.clone();
        field.set_on_change(Some(move |change: &FieldChange<'_>| {
            model.borrow_mut().set(change.name, change.value);
        }));
    }

    run_ui(handle_input, repaint_input, &mut data, &mut state)
}

#[derive(Debug, Default)]
struct Model {
    phone: String,
    birthday: String,
    pin: String,
}

impl Model {
    fn set(&mut self, name: &str, value: &str) {
        match name {
            "phone" => self.phone = value.into(),
            "birthday" => self.birthday = value.into(),
            "pin" => self.pin = value.into(),
            _ => {}
        }
    }

    fn get(&self, name: &str) -> Option<&str> {
        match name {
            "phone" => Some(self.phone.as_str()),
            "birthday" => Some(self.birthday.as_str()),
            "pin" => Some(self.pin.as_str()),
            _ => None,
        }
    }

    /// The owners validation.
    fn errors(&self, field: &TextFieldState) -> String {
        let value = field.value();
        if value.is_empty() {
            return String::new();
        }
        match field.mask() {
            Some(mask) if !mask.is_complete(value) => {
                format!(
                    "{} digits missing",
                    mask.slots() - mask.filled_slots(&digits_only(value))
                )
            }
            None if field.name() == "pin" && value.len() != 4 => "pin needs 4 digits".into(),
            _ => String::new(),
        }
    }
}

struct Data {
    model: Rc<RefCell<Model>>,
}

struct State {
    fields: [TextFieldState; 4],
    focus_idx: usize,
}

static LABELS: [&str; 4] = ["Phone", "Birthday", "PIN", "Account (read only)"];

fn repaint_input(
    frame: &mut Frame<'_>,
    area: Rect,
    data: &mut Data,
    istate: &mut MiniSalsaState,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    let l0 = Layout::horizontal([
        Constraint::Length(2),
        Constraint::Length(30),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .split(area);

    let proto = TextField::new().label("x").block(Block::bordered());
    let l1 = Layout::vertical([Constraint::Length(proto.height()); 4]).split(l0[1]);

    let model = data.model.borrow();
    for (idx, field) in state.fields.iter_mut().enumerate() {
        // one-way sync from the owner.
        if let Some(value) = model.get(field.name()) {
            field.sync_value(Some(value));
        }

        let errors = model.errors(field);
        TextField::new()
            .label(LABELS[idx])
            .errors(errors)
            .block(Block::bordered())
            .style(Style::default().white().on_dark_gray())
            .focus_style(Style::default().black().on_cyan())
            .render(l1[idx], frame.buffer_mut(), field);

        if let Some((cx, cy)) = field.screen_cursor() {
            frame.set_cursor_position((cx, cy));
        }
    }

    let info = Line::from("Tab/Shift-Tab switch fields").black().on_cyan();
    info.render(Rect::new(l0[3].x, l0[3].y + 1, l0[3].width, 1), frame.buffer_mut());
    let dbg = format!("{:?}", *model);
    Line::from(dbg).render(Rect::new(l0[3].x, l0[3].y + 3, l0[3].width, 1), frame.buffer_mut());

    let f = &state.fields[state.focus_idx];
    istate.status = format!("{} cursor {}", f.id(), f.cursor());

    Ok(())
}

fn handle_input(
    event: &crossterm::event::Event,
    _data: &mut Data,
    _istate: &mut MiniSalsaState,
    state: &mut State,
) -> Result<Outcome, anyhow::Error> {
    let back = state.fields.len() - 1;
    let r = match event {
        ct_event!(keycode press Tab) => focus_next(state, 1),
        ct_event!(keycode press SHIFT-BackTab) => focus_next(state, back),
        _ => FieldOutcome::Continue,
    };
    if r.is_consumed() {
        return Ok(r.into());
    }

    let mut r = FieldOutcome::Continue;
    for (idx, field) in state.fields.iter_mut().enumerate() {
        let was_focused = field.is_focused();
        r = field.handle(event, Regular);
        if !was_focused && field.is_focused() {
            // focus by mouse.
            state.focus_idx = idx;
        }
        if r.is_consumed() {
            break;
        }
    }
    for (idx, field) in state.fields.iter().enumerate() {
        field.focus.set(idx == state.focus_idx);
    }

    Ok(r.into())
}

fn focus_next(state: &mut State, step: usize) -> FieldOutcome {
    state.focus_idx = (state.focus_idx + step) % state.fields.len();
    for (idx, field) in state.fields.iter().enumerate() {
        field.focus.set(idx == state.focus_idx);
    }
    FieldOutcome::Changed
}
