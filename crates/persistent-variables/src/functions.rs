//! Script functions exposed to the host's tagging scripts.
//!
//! Album functions act on the album resolved from the call context and do
//! nothing when there is none. Every function returns the empty string except
//! the getters.

use persistent_variables_api::{normalize_tagname, ScriptContext, ScriptFunctionSpec, Translate};
use tracing::debug;

use crate::store::SharedStore;

/// `$set_a(name,value)`
pub fn set_album(store: &SharedStore, ctx: &ScriptContext, name: &str, value: &str) -> String {
    let name = normalize_tagname(name);
    let album = ctx.album_id();
    debug!(
        album = album.as_ref().map(|id| id.as_str()).unwrap_or_default(),
        name = %name,
        value,
        "setting album persistent variable"
    );
    if let Some(album) = album {
        store.lock().set_album_variable(&album, name, value);
    }
    String::new()
}

/// `$get_a(name)`
pub fn get_album(store: &SharedStore, ctx: &ScriptContext, name: &str) -> String {
    let name = normalize_tagname(name);
    let album = ctx.album_id();
    debug!(
        album = album.as_ref().map(|id| id.as_str()).unwrap_or_default(),
        name = %name,
        "getting album persistent variable"
    );
    match album {
        Some(album) => store.lock().get_album_variable(&album, &name, "").to_string(),
        None => String::new(),
    }
}

/// `$unset_a(name)`
pub fn unset_album(store: &SharedStore, ctx: &ScriptContext, name: &str) -> String {
    let name = normalize_tagname(name);
    let album = ctx.album_id();
    debug!(
        album = album.as_ref().map(|id| id.as_str()).unwrap_or_default(),
        name = %name,
        "unsetting album persistent variable"
    );
    if let Some(album) = album {
        store.lock().unset_album_variable(&album, &name);
    }
    String::new()
}

/// `$clear_a()`
pub fn clear_album(store: &SharedStore, ctx: &ScriptContext) -> String {
    let album = ctx.album_id();
    debug!(
        album = album.as_ref().map(|id| id.as_str()).unwrap_or_default(),
        "clearing album persistent variables"
    );
    if let Some(album) = album {
        store.lock().clear_album_variables(&album);
    }
    String::new()
}

/// `$set_s(name,value)`. An empty value unsets the variable.
pub fn set_session(store: &SharedStore, name: &str, value: &str) -> String {
    if value.is_empty() {
        return unset_session(store, name);
    }
    store
        .lock()
        .set_session_variable(normalize_tagname(name), value);
    String::new()
}

/// `$get_s(name)`
pub fn get_session(store: &SharedStore, name: &str) -> String {
    store
        .lock()
        .get_session_variable(&normalize_tagname(name), "")
        .to_string()
}

/// `$unset_s(name)`
pub fn unset_session(store: &SharedStore, name: &str) -> String {
    store.lock().unset_session_variable(&normalize_tagname(name));
    String::new()
}

/// `$clear_s()`
pub fn clear_session(store: &SharedStore) -> String {
    store.lock().clear_session_variables();
    String::new()
}

fn arg(args: &[String], index: usize) -> &str {
    args.get(index).map(String::as_str).unwrap_or_default()
}

/// Registration records for every script function, bound to `store`.
pub fn script_functions<T>(store: &SharedStore, tr: &T) -> Vec<ScriptFunctionSpec>
where
    T: Translate + ?Sized,
{
    let mut functions = Vec::with_capacity(8);

    let s = store.clone();
    functions.push(ScriptFunctionSpec::new(
        "set_a",
        2,
        tr.tr(
            "help.set_a",
            "`$set_a(name,value)`\n\nSets the album variable `name` to `value`.",
        ),
        move |ctx, args| set_album(&s, ctx, arg(args, 0), arg(args, 1)),
    ));
    let s = store.clone();
    functions.push(ScriptFunctionSpec::new(
        "unset_a",
        1,
        tr.tr(
            "help.unset_a",
            "`$unset_a(name)`\n\nClears the album variable `name`.",
        ),
        move |ctx, args| unset_album(&s, ctx, arg(args, 0)),
    ));
    let s = store.clone();
    functions.push(ScriptFunctionSpec::new(
        "get_a",
        1,
        tr.tr(
            "help.get_a",
            "`$get_a(name)`\n\nGets the value of the album variable `name`.",
        ),
        move |ctx, args| get_album(&s, ctx, arg(args, 0)),
    ));
    let s = store.clone();
    functions.push(ScriptFunctionSpec::new(
        "clear_a",
        0,
        tr.tr(
            "help.clear_a",
            "`$clear_a()`\n\nClears all album variables for the current album.",
        ),
        move |ctx, _| clear_album(&s, ctx),
    ));
    let s = store.clone();
    functions.push(ScriptFunctionSpec::new(
        "set_s",
        2,
        tr.tr(
            "help.set_s",
            "`$set_s(name,value)`\n\nSets the session variable `name` to `value`.",
        ),
        move |_, args| set_session(&s, arg(args, 0), arg(args, 1)),
    ));
    let s = store.clone();
    functions.push(ScriptFunctionSpec::new(
        "unset_s",
        1,
        tr.tr(
            "help.unset_s",
            "`$unset_s(name)`\n\nClears the session variable `name`.",
        ),
        move |_, args| unset_session(&s, arg(args, 0)),
    ));
    let s = store.clone();
    functions.push(ScriptFunctionSpec::new(
        "get_s",
        1,
        tr.tr(
            "help.get_s",
            "`$get_s(name)`\n\nGets the value of the session variable `name`.",
        ),
        move |_, args| get_session(&s, arg(args, 0)),
    ));
    let s = store.clone();
    functions.push(ScriptFunctionSpec::new(
        "clear_s",
        0,
        tr.tr("help.clear_s", "`$clear_s()`\n\nClears all session variables."),
        move |_, _| clear_session(&s),
    ));

    functions
}
