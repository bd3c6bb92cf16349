/*
 * Responsibility
 * - Bearer token extraction → verification → request-scoped Identity
 * - Failures never abort the pipeline here; routes that need an identity
 *   reject through the extractor layer instead
 */
pub mod access;
