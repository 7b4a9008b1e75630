//! Sheet tab update handlers

use crate::commands::Cmd;
use crate::messages::SheetMsg;
use crate::model::Workbench;

/// Update function for sheet tab messages
pub fn update_sheets(model: &mut Workbench, msg: SheetMsg) -> Option<Cmd> {
    match msg {
        SheetMsg::Add(name) => {
            model.sheets.add(name);
            Some(Cmd::Redraw)
        }
        SheetMsg::Remove(id) => model.sheets.remove(id).then_some(Cmd::Redraw),
        SheetMsg::Select(id) => model.sheets.select(id).then_some(Cmd::Redraw),
    }
}
