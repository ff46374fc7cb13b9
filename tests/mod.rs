
// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - smoke_tests: Config shape, timesheet file parsing, and end-to-end tallies
// - form_mock: The form/display seams and the signature gate, via mocks
