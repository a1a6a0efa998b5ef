//! Console API for evaluated scripts.
//!
//! Every method writes one line to stderr, tagged with its level, so that
//! stdout only ever carries the parse output.

use boa_engine::{
    Context, JsResult, JsString, JsValue, NativeFunction, js_string, object::ObjectInitializer,
    property::Attribute,
};

/// One `console` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Log,
    Info,
    Warn,
    Error,
}

impl Level {
    const ALL: [Self; 5] = [Self::Debug, Self::Log, Self::Info, Self::Warn, Self::Error];

    const fn method(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Log => "log",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `log` and `info` share the plain tag.
    const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "[JS DEBUG]",
            Self::Log | Self::Info => "[JS]",
            Self::Warn => "[JS WARN]",
            Self::Error => "[JS ERROR]",
        }
    }
}

/// Register the `console` global object on the context.
pub fn register_console(context: &mut Context) -> JsResult<()> {
    let console = {
        let mut console = ObjectInitializer::new(context);
        for level in Level::ALL {
            let method = NativeFunction::from_copy_closure(
                move |_this: &JsValue, args: &[JsValue], context: &mut Context| {
                    emit(level, args, context)
                },
            );
            let _ = console.function(method, JsString::from(level.method()), 0);
        }
        console.build()
    };

    context.register_global_property(js_string!("console"), console, Attribute::all())
}

/// Write `args` on one line, space separated.
fn emit(level: Level, args: &[JsValue], context: &mut Context) -> JsResult<JsValue> {
    let mut line = String::from(level.tag());
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string(context)?.to_std_string_escaped());
    }
    eprintln!("{line}");
    Ok(JsValue::undefined())
}
