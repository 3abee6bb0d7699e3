use crate::component::{Calendar, Component, Event};
use crate::generator::{Emitter, Encoder};
use crate::EncodeError;
use std::io::Write;

macro_rules! generate_emitter {
    ($struct:ty, $($children:ident),*) => {
        impl Emitter for $struct {
            fn emit<W: Write>(&self, encoder: &mut Encoder<'_, W>) -> Result<(), EncodeError> {
                let compname = <$struct as Component>::NAME;
                tracing::debug!(component = compname, "Encoding component");
                encoder.begin(compname)?;
                encoder.encode_properties(Component::get_properties(self))?;
                $(for child in &self.$children {
                    child.emit(encoder)?;
                })*
                encoder.end(compname)
            }
        }
    };
}

generate_emitter!(Event,);
generate_emitter!(Calendar, events);
