use anyhow::Result;
use teloxide::{
    dispatching::{DpHandlerDescription, HandlerExt, UpdateFilterExt},
    dptree::{self, Handler},
    types::Update,
};

use crate::{bot::answers::answers, callbacks::handle_callback_query, commands::Command};

pub fn handler_tree() -> Handler<'static, Result<()>, DpHandlerDescription> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(answers),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback_query))
}
