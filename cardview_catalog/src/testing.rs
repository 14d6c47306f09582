// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory documents that record the requests made of them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::Size;
use serde_json::Value;

use crate::arrange::SortEntry;
use crate::document::{Card, Cards, get_property, set_property};
use crate::layout::ImageMetadata;
use crate::settings::{Environment, Settings};
use crate::socket::Socket;

pub(crate) struct TestCard {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) suit: String,
    pub(crate) value: Option<i64>,
    pub(crate) drawn: bool,
    pub(crate) face: Cell<Option<usize>>,
    pub(crate) face_count: usize,
    pub(crate) owner: bool,
    pub(crate) img: Option<String>,
    pub(crate) size: Option<Size>,
    pub(crate) sort: i64,
    pub(crate) flags: RefCell<Value>,
    pub(crate) log: RefCell<Vec<String>>,
}

impl TestCard {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.into(),
            name: format!("Card {id}"),
            suit: "spades".into(),
            value: Some(1),
            drawn: false,
            face: Cell::new(None),
            face_count: 1,
            owner: true,
            img: None,
            size: None,
            sort: 0,
            flags: RefCell::new(Value::Null),
            log: RefCell::default(),
        }
    }

    pub(crate) fn with_img(mut self, img: &str) -> Self {
        self.img = Some(img.into());
        self
    }

    pub(crate) fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub(crate) fn with_faces(mut self, count: usize, face: Option<usize>) -> Self {
        self.face_count = count;
        self.face.set(face);
        self
    }

    pub(crate) fn not_owned(mut self) -> Self {
        self.owner = false;
        self
    }

    pub(crate) fn mark_drawn(mut self) -> Self {
        self.drawn = true;
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Card for TestCard {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn suit(&self) -> &str {
        &self.suit
    }
    fn value(&self) -> Option<i64> {
        self.value
    }
    fn kind(&self) -> &str {
        "base"
    }
    fn drawn(&self) -> bool {
        self.drawn
    }
    fn face(&self) -> Option<usize> {
        self.face.get()
    }
    fn face_count(&self) -> usize {
        self.face_count
    }
    fn is_owner(&self) -> bool {
        self.owner
    }
    fn source_id(&self) -> &str {
        "origin-deck"
    }
    fn img(&self) -> Option<&str> {
        self.img.as_deref()
    }
    fn explicit_size(&self) -> Option<Size> {
        self.size
    }
    fn sort(&self) -> i64 {
        self.sort
    }
    fn flag(&self, scope: &str, key: &str) -> Option<Value> {
        get_property(&self.flags.borrow(), &format!("{scope}.{key}")).cloned()
    }

    fn set_face(&self, face: Option<usize>) {
        self.face.set(face);
        self.log.borrow_mut().push(format!("face:{face:?}"));
    }
    fn set_flag(&self, scope: &str, key: &str, value: Value) {
        set_property(&mut self.flags.borrow_mut(), &format!("{scope}.{key}"), value);
        self.log.borrow_mut().push(format!("flag:{key}"));
    }
    fn open_sheet(&self) {
        self.log.borrow_mut().push("sheet".into());
    }
    fn delete_dialog(&self) {
        self.log.borrow_mut().push("delete".into());
    }
    fn pass_to(&self, pile_id: &str) {
        self.log.borrow_mut().push(format!("pass:{pile_id}"));
    }
}

#[derive(Default)]
pub(crate) struct TestPile {
    pub(crate) log: RefCell<Vec<String>>,
    pub(crate) sorted: RefCell<Vec<SortEntry>>,
}

impl TestPile {
    pub(crate) fn requests(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Cards for TestPile {
    fn id(&self) -> &str {
        "pile"
    }
    fn name(&self) -> &str {
        "Pile"
    }
    fn play_dialog(&self, card_id: &str) {
        self.log.borrow_mut().push(format!("play:{card_id}"));
    }
    fn deal_dialog(&self) {
        self.log.borrow_mut().push("deal".into());
    }
    fn reset_dialog(&self) {
        self.log.borrow_mut().push("reset".into());
    }
    fn draw_dialog(&self) {
        self.log.borrow_mut().push("draw".into());
    }
    fn pass_dialog(&self) {
        self.log.borrow_mut().push("pass".into());
    }
    fn shuffle(&self) {
        self.log.borrow_mut().push("shuffle".into());
    }
    fn update_sort(&self, updates: Vec<SortEntry>) {
        self.sorted.borrow_mut().extend(updates);
    }
}

#[derive(Default)]
pub(crate) struct TestSocket(pub(crate) RefCell<Vec<(String, String)>>);

impl Socket for TestSocket {
    fn emit(&self, channel: &str, payload: &str) {
        self.0.borrow_mut().push((channel.into(), payload.into()));
    }
}

/// An environment whose socket is returned alongside it for inspection.
pub(crate) fn environment(settings: Settings, is_gm: bool) -> (Environment, Rc<TestSocket>) {
    let socket = Rc::new(TestSocket::default());
    let env = Environment::new(settings, is_gm, socket.clone());
    (env, socket)
}

/// Every image has the same dimensions.
pub(crate) struct FixedImages(pub(crate) Size);

impl ImageMetadata for FixedImages {
    type Error = std::convert::Infallible;

    fn dimensions(&self, _path: &str) -> Result<Size, Self::Error> {
        Ok(self.0)
    }
}
