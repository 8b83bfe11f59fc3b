// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Spec tests live under cli/ and are wired into the desksync crate via
// [[test]] entries; this library target only anchors the workspace member.
