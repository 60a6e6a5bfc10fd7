/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Transport abstraction and the JSON request core
pub mod http;
/// Request arguments, options and descriptors
pub mod requests;
/// Response projections used by the list helpers
pub mod responses;
