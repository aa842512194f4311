use crate::bail_blum;
use crate::errors::{BlumError, BlumResult};
use crate::tvm_types::{TVMStack, TVMStackValue};
use crate::types::{cell_from_boc_b64, cell_to_boc_b64};
use num_bigint::BigInt;
use serde_json::Value;
use std::str::FromStr;
use tonlib_core::cell::ArcCell;

/// Get-method arguments in toncenter v2 form
pub fn stack_to_toncenter(stack: &TVMStack) -> BlumResult<Vec<(&'static str, String)>> {
    let mut entries = Vec::with_capacity(stack.len());
    for value in stack.iter() {
        let entry = match value {
            TVMStackValue::TinyInt(num) => ("num", num.to_string()),
            TVMStackValue::Int(num) => ("num", num.to_string()),
            TVMStackValue::Cell(cell) => ("tvm.Cell", cell_to_boc_b64(cell)?),
            TVMStackValue::CellSlice(cell) => ("tvm.Slice", cell_to_boc_b64(cell)?),
            rest => bail_blum!("toncenter doesn't accept {} as get-method argument", rest.type_name()),
        };
        entries.push(entry);
    }
    Ok(entries)
}

/// Result stack of `runGetMethod`, in emission order
pub fn stack_from_toncenter(entries: &[Value]) -> BlumResult<TVMStack> {
    let mut stack = TVMStack::default();
    for entry in entries {
        stack.push_back(parse_entry(entry)?);
    }
    Ok(stack)
}

// ["num", "0x2a"] | ["null", ...] | ["cell", {"bytes": ...}] | ["slice", {"bytes": ...}] | ["list" | "tuple", {"elements": [...]}]
fn parse_entry(entry: &Value) -> BlumResult<TVMStackValue> {
    let (kind, value) = match entry.as_array().map(Vec::as_slice) {
        Some([Value::String(kind), value]) => (kind.as_str(), value),
        Some([Value::String(kind)]) => (kind.as_str(), &Value::Null),
        _ => return Err(BlumError::unexpected("[type, value] stack entry", entry)),
    };
    let parsed = match kind {
        "num" => TVMStackValue::Int(parse_num(expect_str(value, "num")?)?),
        "null" => TVMStackValue::Null,
        "cell" | "builder" => TVMStackValue::Cell(parse_boc(&value["bytes"])?),
        "slice" => TVMStackValue::CellSlice(parse_boc(&value["bytes"])?),
        "list" | "tuple" => TVMStackValue::Tuple(parse_elements(&value["elements"])?),
        _ => return Err(BlumError::unexpected("num | null | cell | slice | builder | list | tuple", kind)),
    };
    Ok(parsed)
}

// tuple and list elements come in tonlib form: {"@type": "tvm.stackEntryNumber", "number": {"number": "42"}}
fn parse_tvm_entry(entry: &Value) -> BlumResult<TVMStackValue> {
    let kind = expect_str(&entry["@type"], "@type")?;
    let parsed = match kind {
        "tvm.stackEntryNumber" => TVMStackValue::Int(parse_num(expect_str(&entry["number"]["number"], "number")?)?),
        "tvm.stackEntryCell" => TVMStackValue::Cell(parse_boc(&entry["cell"]["bytes"])?),
        "tvm.stackEntrySlice" => TVMStackValue::CellSlice(parse_boc(&entry["slice"]["bytes"])?),
        "tvm.stackEntryTuple" => TVMStackValue::Tuple(parse_elements(&entry["tuple"]["elements"])?),
        "tvm.stackEntryList" => TVMStackValue::Tuple(parse_elements(&entry["list"]["elements"])?),
        "tvm.stackEntryNull" => TVMStackValue::Null,
        _ => return Err(BlumError::unexpected("tvm.stackEntry*", kind)),
    };
    Ok(parsed)
}

fn parse_elements(elements: &Value) -> BlumResult<Vec<TVMStackValue>> {
    match elements.as_array() {
        Some(items) => items.iter().map(parse_tvm_entry).collect(),
        None => Err(BlumError::unexpected("elements array", elements)),
    }
}

/// decimal or `0x`-prefixed hex, optionally negative
fn parse_num(num: &str) -> BlumResult<BigInt> {
    let (negative, digits) = match num.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, num),
    };
    let value = match digits.strip_prefix("0x") {
        Some(hex) => match BigInt::parse_bytes(hex.as_bytes(), 16) {
            Some(value) => value,
            None => bail_blum!("invalid hex number: {num}"),
        },
        None => BigInt::from_str(digits)?,
    };
    Ok(if negative { -value } else { value })
}

fn parse_boc(bytes: &Value) -> BlumResult<ArcCell> { cell_from_boc_b64(expect_str(bytes, "bytes")?) }

fn expect_str<'a>(value: &'a Value, field: &str) -> BlumResult<&'a str> {
    value.as_str().ok_or_else(|| BlumError::unexpected(format!("string field '{field}'"), value))
}
