/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
/// Used to refer to distinct graphs in a batch of input. Graph keys are
/// mapped to consecutive ids, in order of first appearance.
#[derive(Hash, Copy, Clone, Debug, PartialEq, Eq)]
pub struct GraphId {
    id: i64,
}
impl GraphId {
    pub fn value(&self) -> i64 {
        self.id
    }
}
impl<T> From<T> for GraphId
where
    T: Into<i64>,
{
    fn from(n: T) -> Self {
        Self { id: n.into() }
    }
}
