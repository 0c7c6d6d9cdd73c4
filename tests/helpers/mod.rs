//! Shared model fixture for the query test suites.
//!
//! One `Person` type exercises every corner of the surface: decorated and
//! undecorated fields, a method overload pair, a callable without parameter
//! names, constructors of each visibility, and a decorated package.

#![allow(dead_code)]

use annoquery::model::{
    CallableBuilder, FieldBuilder, PackageHandle, ParamBuilder, TypeHandle, Visibility,
};
use once_cell::sync::Lazy;

#[derive(Debug)]
pub struct Entity {
    pub name: &'static str,
}

#[derive(Debug)]
pub struct Column {
    pub name: &'static str,
}

#[derive(Debug)]
pub struct Required;

#[derive(Debug)]
pub struct Deprecated;

#[derive(Debug)]
pub struct Transient;

#[derive(Debug, PartialEq)]
pub struct Max {
    pub value: i64,
}

#[derive(Debug)]
pub struct Audited;

pub static PERSON: Lazy<TypeHandle> = Lazy::new(build_person);

fn build_person() -> TypeHandle {
    let package = PackageHandle::builder("demo::people")
        .decoration(Audited)
        .build();
    TypeHandle::builder("Person", &package)
        .decoration(Entity { name: "person" })
        .field(
            FieldBuilder::new("name", "String")
                .decoration(Column { name: "NAME" })
                .decoration(Required),
        )
        .field(FieldBuilder::new("age", "Integer").decoration(Column { name: "AGE" }))
        .field(FieldBuilder::new("nickname", "String"))
        .method(
            CallableBuilder::method("get_name")
                .decoration(Deprecated)
                .decoration(Transient),
        )
        .method(
            CallableBuilder::method("set_name")
                .param(ParamBuilder::named("name", "String").decoration(Required)),
        )
        .method(
            CallableBuilder::method("set_name")
                .param(ParamBuilder::named("first", "String"))
                .param(ParamBuilder::named("last", "String")),
        )
        .method(
            CallableBuilder::method("import_raw")
                .param(ParamBuilder::positional("String").decoration(Required)),
        )
        .constructor(
            CallableBuilder::constructor()
                .decoration(Deprecated)
                .param(ParamBuilder::named("name", "String").decoration(Required))
                .param(ParamBuilder::named("age", "Integer").decoration(Max { value: 20 })),
        )
        .constructor(CallableBuilder::constructor())
        .constructor(
            CallableBuilder::constructor()
                .visibility(Visibility::Private)
                .param(ParamBuilder::named("secret", "String")),
        )
        .build()
}
