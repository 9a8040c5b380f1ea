pub(crate) mod arrow_button;
pub(crate) mod option_radio_group;
pub(crate) mod option_select;
